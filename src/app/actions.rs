//! Side effects requested by the event handler.
//!
//! The handler mutates [`crate::app::CatalogState`] in memory and returns
//! [`Action`]s describing what must happen outside of it. Keeping persistence
//! out of the state lets the filtering and preference logic run without any
//! storage, while [`crate::app::Catalog`] executes the actions after each
//! event.
//!
//! # Example
//!
//! ```rust
//! use toolshelf::app::{handle_event, Action, CatalogState, Event};
//!
//! let mut state = CatalogState::default();
//! let (_changed, actions) = handle_event(&mut state, Event::AddFavorite("gpt".into()));
//! assert!(matches!(actions.as_slice(), [Action::SavePreferences(_)]));
//! ```

use crate::domain::{ToolCollection, UserPreferences};

/// Commands representing side effects to be executed by the catalog runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Writes the preferences snapshot to durable storage.
    ///
    /// Emitted whenever an event changed favorites, recents, theme, view
    /// mode or preferred categories.
    SavePreferences(UserPreferences),

    /// Writes the collections snapshot to durable storage.
    SaveCollections(Vec<ToolCollection>),
}
