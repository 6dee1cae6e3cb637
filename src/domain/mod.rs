//! Domain layer for the toolshelf catalog.
//!
//! Plain data types with no I/O: the [`Tool`] entity and its enums, the
//! [`FilterCriteria`] record, the persisted [`UserPreferences`], user-curated
//! [`ToolCollection`]s, and the crate's error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`tool`]: Tool entity, categories and access levels
//! - [`filters`]: Filter criteria and sort settings
//! - [`preferences`]: User preferences and their list invariants
//! - [`collection`]: Tool collections

pub mod collection;
pub mod error;
pub mod filters;
pub mod preferences;
pub mod tool;

pub use collection::{NewCollection, ToolCollection};
pub use error::{Result, ToolshelfError};
pub use filters::{FilterCriteria, SortKey, SortOrder};
pub use preferences::{Theme, UserPreferences, RECENT_TOOLS_LIMIT};
pub use tool::{AccessLevel, Tool, ToolCategory};
