//! Infrastructure layer for filesystem and environment interactions.
//!
//! - [`paths`]: data directory resolution and tilde expansion
//! - [`dataset`]: tool data sources feeding the catalog

pub mod dataset;
pub mod paths;

pub use dataset::{parse_tools, JsonFileSource, StaticSource, ToolSource};
pub use paths::{data_dir, expand_tilde};
