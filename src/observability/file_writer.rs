//! Append-only line writer with size-based rotation.
//!
//! Trace exports are appended one JSON document per line. Once the active
//! file grows past [`ROTATE_AT_BYTES`] it is moved aside as
//! `<stem>.json.<unix_nanos>` and only the newest [`KEEP_BACKUPS`] backups are
//! kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const ROTATE_AT_BYTES: u64 = 8 * 1024 * 1024;
const KEEP_BACKUPS: usize = 3;

/// Thread-safe rotating writer. The file is opened lazily on first write.
pub struct RotatingFile {
    path: PathBuf,
    rotate_at: u64,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limit(path, ROTATE_AT_BYTES)
    }

    const fn with_limit(path: PathBuf, rotate_at: u64) -> Self {
        Self {
            path,
            rotate_at,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails on rotation, open or write errors, or if the lock is poisoned.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self.handle.lock().map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}"))
        })?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.rotate_at)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path())?;
        }
        self.prune_backups()
    }

    /// `<stem>.json.<unix_nanos>`, bumped until no file of that name exists.
    fn backup_path(&self) -> PathBuf {
        let mut stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_nanos();
        loop {
            let candidate = self.path.with_extension(format!("json.{stamp}"));
            if !candidate.exists() {
                return candidate;
            }
            stamp += 1;
        }
    }

    fn prune_backups(&self) -> io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        let Some(name) = self.path.file_name().and_then(|n| n.to_str()) else {
            return Ok(());
        };
        let prefix = format!("{name}.");

        let mut backups: Vec<(PathBuf, Option<SystemTime>)> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_backup(path, &prefix))
            .map(|path| {
                let modified = fs::metadata(&path).and_then(|m| m.modified()).ok();
                (path, modified)
            })
            .collect();

        // newest first
        backups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

        for (stale, _) in backups.into_iter().skip(KEEP_BACKUPS) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

fn is_backup(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_prefix(prefix))
        .is_some_and(|suffix| !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()))
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("rotate_at", &self.rotate_at)
            .finish_non_exhaustive()
    }
}
