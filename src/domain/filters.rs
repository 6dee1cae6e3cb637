//! Filter criteria narrowing a tool collection.
//!
//! Every field of [`FilterCriteria`] is independently optional; an absent field
//! places no constraint on its dimension. Criteria are ephemeral: they live in
//! the catalog state for the current session and are never persisted.

use crate::domain::error::ToolshelfError;
use crate::domain::tool::{AccessLevel, ToolCategory};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Key used to order the filtered tool list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Popularity score, highest first by default.
    Popularity,
    /// Rating, highest first by default.
    Rating,
    /// New-flagged tools first; no ordering among equally flagged tools.
    Newest,
    /// Name, alphabetical.
    Name,
}

impl FromStr for SortKey {
    type Err = ToolshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popularity" => Ok(Self::Popularity),
            "rating" => Ok(Self::Rating),
            "newest" => Ok(Self::Newest),
            "name" => Ok(Self::Name),
            other => Err(ToolshelfError::Config(format!("unknown sort key: {other}"))),
        }
    }
}

/// Sort direction. Unset behaves as [`SortOrder::Asc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    /// Negates the key's natural comparison.
    Desc,
}

impl FromStr for SortOrder {
    type Err = ToolshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ToolshelfError::Config(format!("unknown sort order: {other}"))),
        }
    }
}

/// Independently optional constraints on a tool collection.
///
/// # Examples
///
/// ```
/// use toolshelf::domain::{FilterCriteria, SortKey, ToolCategory};
///
/// let filters = FilterCriteria {
///     categories: Some(vec![ToolCategory::CodeGeneration]),
///     has_api: Some(true),
///     sort_by: Some(SortKey::Rating),
///     ..Default::default()
/// };
///
/// // Sort fields are not constraints.
/// assert_eq!(filters.active_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<ToolCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_levels: Option<Vec<AccessLevel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_api: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl FilterCriteria {
    /// Number of active narrowing constraints.
    ///
    /// Counts each selected category, access level and tag, plus one each for
    /// the API and minimum-rating constraints when set. Sorting is excluded.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.categories.as_ref().map_or(0, Vec::len)
            + self.access_levels.as_ref().map_or(0, Vec::len)
            + self.tags.as_ref().map_or(0, Vec::len)
            + usize::from(self.has_api.is_some())
            + usize::from(self.min_rating.is_some())
    }

    /// Returns `true` if no field is set at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
