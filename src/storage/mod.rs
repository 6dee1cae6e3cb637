//! Storage layer for persisted user state.
//!
//! Only user preferences and collections are persisted. Each is a named record
//! holding a plain JSON document, read once at startup and rewritten after
//! every mutation that changes it.
//!
//! # Modules
//!
//! - `backend`: Storage trait and record names
//! - `json`: JSON file per record, written atomically
//! - `memory`: In-memory backend

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::{Storage, COLLECTIONS_RECORD, PREFERENCES_RECORD};
pub use json::JsonStorage;
pub use memory::MemoryStorage;
