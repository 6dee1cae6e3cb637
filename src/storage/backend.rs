//! Storage backend abstraction.
//!
//! The catalog persists two named records: the user's preferences and their
//! collections. [`Storage`] is a minimal key/document interface over those
//! records; the typed helpers serialize with `serde_json` so every backend
//! shares one document format.
//!
//! Tools and the derived filtered view are never persisted.

use crate::domain::error::{Result, ToolshelfError};
use crate::domain::{ToolCollection, UserPreferences};

/// Record name holding exactly the [`UserPreferences`] document.
pub const PREFERENCES_RECORD: &str = "ai-tools-preferences";

/// Record name holding the list of [`ToolCollection`]s.
pub const COLLECTIONS_RECORD: &str = "ai-tools-collections";

/// Abstraction over durable storage backends.
///
/// Implementations only move opaque documents; decoding and its fallback
/// policy live in the provided methods and in [`crate::app::Catalog`].
///
/// # Implementations
///
/// - [`crate::storage::JsonStorage`]: one JSON file per record, atomic writes
/// - [`crate::storage::MemoryStorage`]: in-process map, for tests and embedding
///
/// # Examples
///
/// ```
/// use toolshelf::domain::UserPreferences;
/// use toolshelf::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::default();
/// assert!(storage.load_preferences()?.is_none());
///
/// let mut prefs = UserPreferences::default();
/// prefs.add_favorite("gpt");
/// storage.save_preferences(&prefs)?;
/// assert_eq!(storage.load_preferences()?, Some(prefs));
/// # Ok::<(), toolshelf::ToolshelfError>(())
/// ```
pub trait Storage {
    /// Reads the raw document stored under `name`.
    ///
    /// Returns `Ok(None)` when no record has been written yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load_record(&self, name: &str) -> Result<Option<String>>;

    /// Replaces the document stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save_record(&mut self, name: &str, contents: &str) -> Result<()>;

    /// Loads and decodes the preferences record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read or is not a valid
    /// preferences document.
    fn load_preferences(&self) -> Result<Option<UserPreferences>> {
        load_json(self, PREFERENCES_RECORD)
    }

    /// Encodes and writes the preferences record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn save_preferences(&mut self, preferences: &UserPreferences) -> Result<()> {
        save_json(self, PREFERENCES_RECORD, preferences)
    }

    /// Loads and decodes the collections record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read or decoded.
    fn load_collections(&self) -> Result<Option<Vec<ToolCollection>>> {
        load_json(self, COLLECTIONS_RECORD)
    }

    /// Encodes and writes the collections record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn save_collections(&mut self, collections: &[ToolCollection]) -> Result<()> {
        save_json(self, COLLECTIONS_RECORD, collections)
    }
}

fn load_json<S, T>(storage: &S, name: &str) -> Result<Option<T>>
where
    S: Storage + ?Sized,
    T: serde::de::DeserializeOwned,
{
    let Some(contents) = storage.load_record(name)? else {
        return Ok(None);
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| ToolshelfError::Storage(format!("failed to parse record {name}: {e}")))
}

fn save_json<S, T>(storage: &mut S, name: &str, value: &T) -> Result<()>
where
    S: Storage + ?Sized,
    T: serde::Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ToolshelfError::Storage(format!("failed to serialize record {name}: {e}")))?;
    storage.save_record(name, &json)
}
