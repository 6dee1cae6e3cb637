//! In-memory storage backend.

use crate::domain::error::Result;
use crate::storage::backend::Storage;
use std::collections::HashMap;

/// Keeps records in a process-local map.
///
/// Nothing survives the process; useful for tests and for embedding the
/// catalog where durability is handled elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates a storage pre-seeded with one raw record.
    pub fn with_record(name: impl Into<String>, contents: impl Into<String>) -> Self {
        let mut records = HashMap::new();
        records.insert(name.into(), contents.into());
        Self { records }
    }

    /// Raw document under `name`, if any.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&str> {
        self.records.get(name).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load_record(&self, name: &str) -> Result<Option<String>> {
        Ok(self.records.get(name).cloned())
    }

    fn save_record(&mut self, name: &str, contents: &str) -> Result<()> {
        self.records.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}
