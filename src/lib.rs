//! Toolshelf: a browsable catalog of AI tools with persistent preferences.
//!
//! Toolshelf provides:
//! - A static tool catalog narrowed by composable filters and free-text search
//! - Deterministic sorting by popularity, rating, newness or name
//! - Favorites and a bounded recently-viewed list that survive restarts
//! - Named tool collections
//! - JSON file persistence behind a pluggable storage trait

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Composition root (main.rs / initialize)            │  ← Wiring
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Catalog store
//! │  - Filter/sort engine                               │
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!                  │                      │
//! ┌───────────────────────────┐   ┌───────────────────────────┐
//! │ Storage Layer (storage/)  │   │ Infrastructure            │
//! │ - Storage trait           │   │ - Data directory          │
//! │ - JSON files / in-memory  │   │ - Tool datasets           │
//! └───────────────────────────┘   └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Tool, categories, access levels                  │
//! │  - Filter criteria, preferences, collections        │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to an OTLP JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Catalog state, filter engine and event/action model
//! - [`domain`]: Core domain types and errors
//! - [`infrastructure`]: Data directory and dataset loading
//! - [`storage`]: Preference and collection persistence
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! Configuration comes from `key=value` pairs or a TOML file:
//!
//! ```toml
//! data_dir = "~/.local/share/toolshelf"
//! dataset = "/usr/share/toolshelf/tools.json"
//! trace_level = "toolshelf=debug"
//! trace_stderr = false
//! ```
//!
//! # Example
//!
//! ```rust
//! use toolshelf::app::{Catalog, Event, FilterPatch, Patch};
//! use toolshelf::domain::{AccessLevel, SortKey, Tool, ToolCategory};
//! use toolshelf::storage::MemoryStorage;
//!
//! let mut catalog = Catalog::open(MemoryStorage::default());
//! catalog.load_tools(vec![
//!     Tool::new("gpt", "ChatGPT", "", vec![ToolCategory::TextGeneration], "", AccessLevel::Free)
//!         .with_rating(4.7),
//!     Tool::new(
//!         "mj",
//!         "Midjourney",
//!         "",
//!         vec![ToolCategory::ImageGeneration],
//!         "",
//!         AccessLevel::Paid,
//!     )
//!     .with_rating(4.5),
//! ]);
//!
//! catalog.dispatch(Event::UpdateFilters(FilterPatch {
//!     sort_by: Patch::Set(SortKey::Name),
//!     ..Default::default()
//! }));
//! catalog.dispatch(Event::ViewTool("mj".into()));
//!
//! let state = catalog.state();
//! let names: Vec<&str> = state.filtered_tools().iter().map(|t| t.name.as_str()).collect();
//! assert_eq!(names, ["ChatGPT", "Midjourney"]);
//! assert_eq!(state.preferences().recent_tools, ["mj"]);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod observability;

pub use app::{handle_event, Action, Catalog, CatalogState, Event};
pub use domain::{FilterCriteria, Result, Tool, ToolshelfError, UserPreferences};

use infrastructure::{expand_tilde, JsonFileSource, ToolSource};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storage::JsonStorage;

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for persisted records and trace files.
    ///
    /// Default: [`infrastructure::data_dir`].
    pub data_dir: Option<PathBuf>,

    /// JSON file holding the tool dataset.
    pub dataset: Option<PathBuf>,

    /// `EnvFilter` directive for tracing, e.g. `"debug"` or
    /// `"toolshelf::storage=trace"`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Also print log events to stderr.
    pub trace_stderr: bool,
}

impl Config {
    /// Parses configuration from `key=value` pairs.
    ///
    /// Recognized keys are `data_dir`, `dataset`, `trace_level` and
    /// `trace_stderr`. Empty values are treated as unset, a leading `~` in
    /// paths is expanded, and an unparseable `trace_stderr` falls back to
    /// `false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use toolshelf::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("dataset".to_string(), "/srv/tools.json".to_string());
    /// map.insert("trace_stderr".to_string(), "true".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.dataset.as_deref(), Some(std::path::Path::new("/srv/tools.json")));
    /// assert!(config.trace_stderr);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| map.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());
        let path = |key: &str| value(key).map(|v| PathBuf::from(expand_tilde(v)));

        Self {
            data_dir: path("data_dir"),
            dataset: path("dataset"),
            trace_level: value("trace_level").map(String::from),
            trace_stderr: value("trace_stderr").is_some_and(parse_flag),
        }
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ToolshelfError::Io`] if the file cannot be read and
    /// [`ToolshelfError::Config`] if it is not valid TOML for this shape.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)
            .map_err(|e| ToolshelfError::Config(format!("{}: {e}", path.display())))?;

        config.data_dir = config.data_dir.map(expand_path);
        config.dataset = config.dataset.map(expand_path);
        Ok(config)
    }

    /// Overlays the values set in `other` onto `self`.
    #[must_use]
    pub fn merged_with(self, other: Self) -> Self {
        Self {
            data_dir: other.data_dir.or(self.data_dir),
            dataset: other.dataset.or(self.dataset),
            trace_level: other.trace_level.or(self.trace_level),
            trace_stderr: other.trace_stderr || self.trace_stderr,
        }
    }

    /// The configured data directory, or the platform default.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(infrastructure::data_dir)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn expand_path(path: PathBuf) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(expand_tilde(s)),
        None => path,
    }
}

/// Builds a catalog over JSON storage in the configured data directory and
/// loads the configured dataset, if any.
///
/// # Errors
///
/// Fails if the data directory cannot be created or the dataset cannot be
/// read or parsed. Unreadable persisted records are not errors; they fall
/// back to defaults.
pub fn initialize(config: &Config) -> Result<Catalog<JsonStorage>> {
    let _span = tracing::debug_span!("initialize").entered();

    let storage = JsonStorage::open(config.data_dir())?;
    let mut catalog = Catalog::open(storage);

    if let Some(dataset) = &config.dataset {
        let tools = JsonFileSource::new(dataset).load()?;
        tracing::info!(tool_count = tools.len(), dataset = ?dataset, "catalog loaded");
        catalog.load_tools(tools);
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_ignores_unknown_and_empty_values() {
        let mut map = BTreeMap::new();
        map.insert("data_dir".to_string(), "   ".to_string());
        map.insert("trace_stderr".to_string(), "maybe".to_string());
        map.insert("theme".to_string(), "dark".to_string());

        assert_eq!(Config::from_map(&map), Config::default());
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolshelf.toml");
        std::fs::write(&path, "dataset = \"/srv/tools.json\"\ntrace_level = \"debug\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.dataset, Some(PathBuf::from("/srv/tools.json")));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(!config.trace_stderr);
    }

    #[test]
    fn from_file_rejects_wrong_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolshelf.toml");
        std::fs::write(&path, "trace_stderr = \"sometimes\"\n").unwrap();

        assert!(matches!(Config::from_file(&path), Err(ToolshelfError::Config(_))));
    }

    #[test]
    fn later_config_wins_when_merged() {
        let file = Config {
            dataset: Some(PathBuf::from("/a.json")),
            trace_level: Some("info".into()),
            ..Default::default()
        };
        let args = Config {
            dataset: Some(PathBuf::from("/b.json")),
            ..Default::default()
        };

        let merged = file.merged_with(args);
        assert_eq!(merged.dataset, Some(PathBuf::from("/b.json")));
        assert_eq!(merged.trace_level.as_deref(), Some("info"));
    }

    #[test]
    fn initialize_loads_dataset_into_json_backed_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("tools.json");
        let json = r#"[{"id":"gpt","name":"ChatGPT","description":"",
            "categories":["text-generation"],"url":"","accessLevel":"free"}]"#;
        std::fs::write(&dataset, json).unwrap();

        let config = Config {
            data_dir: Some(dir.path().join("data")),
            dataset: Some(dataset),
            ..Default::default()
        };
        let catalog = initialize(&config).unwrap();
        assert_eq!(catalog.state().filtered_tools().len(), 1);
        assert!(dir.path().join("data").is_dir());
    }

    #[test]
    fn initialize_reports_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            dataset: Some(dir.path().join("absent.json")),
            ..Default::default()
        };
        assert!(initialize(&config).is_err());
    }
}
