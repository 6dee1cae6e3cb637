//! Tool data sources.
//!
//! The catalog does not own its dataset; a [`ToolSource`] supplies the ordered
//! tool list once per session. Beyond shape checking during deserialization
//! and optional-field defaulting, sources perform no validation.

use crate::domain::error::{Result, ToolshelfError};
use crate::domain::Tool;
use std::path::PathBuf;

/// Supplies the static, ordered tool collection.
pub trait ToolSource {
    /// Loads every tool, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or parsed.
    fn load(&self) -> Result<Vec<Tool>>;
}

/// Reads a JSON array of tools from a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ToolSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Tool>> {
        let _span = tracing::debug_span!("load_dataset", path = ?self.path).entered();

        let contents = std::fs::read_to_string(&self.path)?;
        let tools = parse_tools(&contents)?;

        tracing::debug!(tool_count = tools.len(), "dataset loaded");
        Ok(tools)
    }
}

/// Serves a fixed in-memory tool list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    tools: Vec<Tool>,
}

impl StaticSource {
    #[must_use]
    pub const fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }
}

impl ToolSource for StaticSource {
    fn load(&self) -> Result<Vec<Tool>> {
        Ok(self.tools.clone())
    }
}

/// Parses a JSON array of tool records.
///
/// # Errors
///
/// Returns [`ToolshelfError::Dataset`] when the document is not an array of
/// tools, naming the offending line and column.
pub fn parse_tools(json: &str) -> Result<Vec<Tool>> {
    serde_json::from_str(json)
        .map_err(|e| ToolshelfError::Dataset(format!("invalid tool dataset: {e}")))
}
