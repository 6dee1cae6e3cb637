//! Path resolution for the data directory and user-supplied paths.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TOOLSHELF_DATA_DIR";

/// Returns the directory holding persisted records and trace files.
///
/// Resolution order:
/// 1. `$TOOLSHELF_DATA_DIR`
/// 2. `$XDG_DATA_HOME/toolshelf`
/// 3. `$HOME/.local/share/toolshelf`
/// 4. `./.toolshelf`
#[must_use]
pub fn data_dir() -> PathBuf {
    resolve_data_dir(|key| std::env::var(key).ok())
}

fn resolve_data_dir(env: impl Fn(&str) -> Option<String>) -> PathBuf {
    let non_empty = |key: &str| env(key).filter(|value| !value.is_empty());

    if let Some(dir) = non_empty(DATA_DIR_ENV) {
        return PathBuf::from(expand_tilde_with(&dir, non_empty("HOME").as_deref()));
    }
    if let Some(xdg) = non_empty("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("toolshelf");
    }
    if let Some(home) = non_empty("HOME") {
        return PathBuf::from(home).join(".local").join("share").join("toolshelf");
    }
    PathBuf::from(".toolshelf")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or with no `$HOME` set, are returned as is.
///
/// # Examples
///
/// ```
/// use toolshelf::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, std::env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    match home {
        Some(home) if path == "~" => home.to_string(),
        Some(home) if path.starts_with("~/") => path.replacen('~', home, 1),
        _ => path.to_string(),
    }
}
