//! User-curated collections of tools.
//!
//! A collection groups tool ids under a name, for example "Content creation".
//! Collections reference tools by id; the tools themselves stay owned by the
//! catalog state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, ordered group of tool ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCollection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Member tool ids in insertion order, without duplicates.
    #[serde(default)]
    pub tool_ids: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ToolCollection {
    /// Builds an empty collection from user input.
    #[must_use]
    pub fn new(id: String, input: NewCollection, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            tool_ids: Vec::new(),
            is_public: input.is_public,
            created_by: input.created_by,
            created_at,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn contains(&self, tool_id: &str) -> bool {
        self.tool_ids.iter().any(|id| id == tool_id)
    }
}

/// Input for creating a collection.
///
/// Name validation (non-empty, trimmed) is left to the caller collecting input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewCollection {
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub created_by: String,
}

impl NewCollection {
    /// Public collection with an empty description, created by `created_by`.
    pub fn named(name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            is_public: true,
            created_by: created_by.into(),
        }
    }
}
