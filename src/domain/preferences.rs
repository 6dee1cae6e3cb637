//! Durable per-user settings.
//!
//! [`UserPreferences`] is the only record the catalog persists between
//! sessions. The list operations here own the record's invariants: favorites
//! behave as a set, and recents are a most-recent-first list of at most
//! [`RECENT_TOOLS_LIMIT`] unique ids.

use crate::domain::tool::ToolCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of recently viewed tool ids kept.
pub const RECENT_TOOLS_LIMIT: usize = 20;

/// Colour scheme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the host system setting.
    #[default]
    System,
}

/// Persisted user preferences.
///
/// Missing fields in a persisted document fall back to their defaults
/// individually, so older or partial records still load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    /// Favorited tool ids. Set semantics; order is not meaningful.
    pub favorite_tools: Vec<String>,
    /// Recently viewed tool ids, most recent first.
    pub recent_tools: Vec<String>,
    pub preferred_categories: Vec<ToolCategory>,
    pub theme: Theme,
    pub compact_view: bool,
}

impl UserPreferences {
    #[must_use]
    pub fn is_favorite(&self, tool_id: &str) -> bool {
        self.favorite_tools.iter().any(|id| id == tool_id)
    }

    /// Adds `tool_id` to the favorites. Returns `false` if it was already there.
    pub fn add_favorite(&mut self, tool_id: &str) -> bool {
        if self.is_favorite(tool_id) {
            return false;
        }
        self.favorite_tools.push(tool_id.to_string());
        true
    }

    /// Removes `tool_id` from the favorites. Returns `false` if it was absent.
    pub fn remove_favorite(&mut self, tool_id: &str) -> bool {
        let before = self.favorite_tools.len();
        self.favorite_tools.retain(|id| id != tool_id);
        self.favorite_tools.len() != before
    }

    /// Moves or inserts `tool_id` at the front of the recents list.
    ///
    /// Any previous occurrence is removed first and the list is truncated to
    /// [`RECENT_TOOLS_LIMIT`] entries. Returns `false` when the id was already
    /// the most recent entry, in which case nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolshelf::domain::UserPreferences;
    ///
    /// let mut prefs = UserPreferences::default();
    /// prefs.record_recent("a");
    /// prefs.record_recent("b");
    /// prefs.record_recent("a");
    /// assert_eq!(prefs.recent_tools, vec!["a", "b"]);
    /// ```
    pub fn record_recent(&mut self, tool_id: &str) -> bool {
        if self.recent_tools.first().is_some_and(|id| id == tool_id) {
            return false;
        }
        self.recent_tools.retain(|id| id != tool_id);
        self.recent_tools.insert(0, tool_id.to_string());
        self.recent_tools.truncate(RECENT_TOOLS_LIMIT);
        true
    }

    /// Re-establishes the list invariants on data read from storage.
    ///
    /// Duplicates are dropped keeping the first occurrence, and recents are
    /// truncated to [`RECENT_TOOLS_LIMIT`].
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        dedup_keep_first(&mut self.favorite_tools);
        dedup_keep_first(&mut self.recent_tools);
        self.recent_tools.truncate(RECENT_TOOLS_LIMIT);
        dedup_keep_first(&mut self.preferred_categories);
        self
    }
}

fn dedup_keep_first<T: Eq + std::hash::Hash + Clone>(items: &mut Vec<T>) {
    let mut seen = HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(item.clone()));
}
