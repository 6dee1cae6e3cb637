//! Application layer: filtering, state, events and the catalog runtime.
//!
//! Data flows in one direction:
//!
//! ```text
//! Presentation → Event → handle_event → CatalogState mutation → Actions → Storage
//!                                              │
//!                                              └→ filter_tools → derived view → observers
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Pure filter/sort engine
//! - [`patch`]: Partial update records for filters and preferences
//! - [`state`]: Catalog state container with its derived view
//! - [`handler`]: Event processing and action emission
//! - [`actions`]: Side effect commands
//! - [`catalog`]: Runtime binding state to a storage backend

pub mod actions;
pub mod catalog;
pub mod filter;
pub mod handler;
pub mod patch;
pub mod state;

pub use actions::Action;
pub use catalog::Catalog;
pub use filter::{filter_tools, sort_tools};
pub use handler::{handle_event, Event};
pub use patch::{FilterPatch, Patch, PreferencesPatch};
pub use state::CatalogState;
