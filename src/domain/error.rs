//! Error types for the toolshelf catalog.
//!
//! The filtering and state operations are total, so errors only surface at
//! the I/O edges: reading the tool dataset, loading configuration, and the
//! persistence backend. [`ToolshelfError`] consolidates those conditions and
//! [`Result`] is the matching alias used throughout the crate.

use thiserror::Error;

/// The main error type for toolshelf operations.
///
/// Variants carrying a `String` describe the failure in words; `Io` wraps
/// standard library I/O errors via `#[from]` so `?` works on filesystem calls.
///
/// # Examples
///
/// ```
/// use toolshelf::ToolshelfError;
///
/// fn read_dataset() -> Result<(), ToolshelfError> {
///     Err(ToolshelfError::Dataset("expected a JSON array".to_string()))
/// }
///
/// assert!(read_dataset().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ToolshelfError {
    /// Reading or writing a persisted record failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tool dataset could not be parsed.
    ///
    /// Raised when the injected data source does not match the tool shape,
    /// for example an unknown category identifier or a missing `id`.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for toolshelf operations.
pub type Result<T> = std::result::Result<T, ToolshelfError>;
