//! JSON file-based storage backend.
//!
//! Each record lives in its own human-readable file, `<data_dir>/<name>.json`.
//! Writes go to a temporary file first and are renamed into place, so a crash
//! mid-write never leaves a half-written record behind.
//!
//! # Layout
//!
//! ```text
//! ~/.local/share/toolshelf/
//! ├── ai-tools-preferences.json
//! └── ai-tools-collections.json
//! ```
//!
//! The preferences file holds exactly the preferences document:
//!
//! ```json
//! {
//!   "favoriteTools": ["chatgpt"],
//!   "recentTools": ["midjourney", "chatgpt"],
//!   "preferredCategories": [],
//!   "theme": "system",
//!   "compactView": false
//! }
//! ```

use crate::domain::error::{Result, ToolshelfError};
use crate::storage::backend::Storage;
use std::path::{Path, PathBuf};

/// JSON file storage backend rooted at a data directory.
///
/// Reads hit the filesystem every time; the catalog only reads at startup.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    data_dir: PathBuf,
}

impl JsonStorage {
    /// Opens a storage rooted at `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use toolshelf::storage::JsonStorage;
    ///
    /// let storage = JsonStorage::open("/tmp/toolshelf")?;
    /// # Ok::<(), toolshelf::ToolshelfError>(())
    /// ```
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        tracing::debug!(path = ?data_dir, "initializing JSON storage");
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing record `name`.
    ///
    /// Record names are plain identifiers; anything outside
    /// `[A-Za-z0-9_-]` is replaced so a name can never escape the directory.
    #[must_use]
    pub fn record_path(&self, name: &str) -> PathBuf {
        let file_name: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.data_dir.join(format!("{file_name}.json"))
    }
}

impl Storage for JsonStorage {
    fn load_record(&self, name: &str) -> Result<Option<String>> {
        let path = self.record_path(name);
        let _span = tracing::debug_span!("json_load_record", record = %name).entered();

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(bytes = contents.len(), "record loaded");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("record not found");
                Ok(None)
            }
            Err(e) => Err(ToolshelfError::Storage(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn save_record(&mut self, name: &str, contents: &str) -> Result<()> {
        let path = self.record_path(name);
        let _span =
            tracing::debug_span!("json_save_record", record = %name, bytes = contents.len())
                .entered();

        let tmp_path = path.with_extension("json.tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, contents)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!("record saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Theme, UserPreferences};
    use crate::storage::PREFERENCES_RECORD;

    #[test]
    fn missing_record_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::open(dir.path()).unwrap();
        assert!(storage.load_record(PREFERENCES_RECORD).unwrap().is_none());
        assert!(storage.load_preferences().unwrap().is_none());
    }

    #[test]
    fn preferences_persist_as_camel_case_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::open(dir.path()).unwrap();
        let prefs = UserPreferences {
            favorite_tools: vec!["chatgpt".into()],
            theme: Theme::Dark,
            ..Default::default()
        };
        storage.save_preferences(&prefs).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("ai-tools-preferences.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["favoriteTools"], serde_json::json!(["chatgpt"]));
        assert_eq!(value["theme"], "dark");
        assert_eq!(value.as_object().map(serde_json::Map::len), Some(5));

        assert_eq!(storage.load_preferences().unwrap(), Some(prefs));
        assert!(!dir.path().join("ai-tools-preferences.json.tmp").exists());
    }

    #[test]
    fn corrupt_record_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::open(dir.path()).unwrap();
        std::fs::write(storage.record_path(PREFERENCES_RECORD), "{ not json").unwrap();
        assert!(matches!(storage.load_preferences(), Err(ToolshelfError::Storage(_))));
    }

    #[test]
    fn record_names_cannot_escape_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::open(dir.path()).unwrap();
        let path = storage.record_path("../outside");
        assert_eq!(path.parent(), Some(dir.path()));
    }

    #[test]
    fn open_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = JsonStorage::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(storage.data_dir(), nested.as_path());
    }
}
