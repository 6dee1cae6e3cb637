//! Catalog runtime: state plus its persistence side effects.
//!
//! [`Catalog`] is the object a composition root constructs and hands to the
//! presentation layer. It owns a [`CatalogState`] and a [`Storage`] backend,
//! runs every mutation through [`handle_event`], executes the returned
//! [`Action`]s, and then notifies observers.
//!
//! # Lifecycle
//!
//! 1. **Open**: rehydrate preferences and collections from storage. Missing
//!    or malformed records fall back to defaults.
//! 2. **Load**: the caller dispatches `Event::LoadTools` with the dataset.
//! 3. **Dispatch**: each event completes, including persistence, before any
//!    observer runs, so observers never see a partial update.
//!
//! Persistence is fire-and-forget: a failed write is logged and the in-memory
//! state stays authoritative for the rest of the session.

use crate::app::handler::{handle_event, Event};
use crate::app::{Action, CatalogState};
use crate::domain::{NewCollection, Tool};
use crate::storage::Storage;
use std::fmt;

type Observer = Box<dyn FnMut(&CatalogState)>;

/// Catalog state bound to a storage backend.
///
/// # Example
///
/// ```rust
/// use toolshelf::app::{Catalog, Event};
/// use toolshelf::domain::{AccessLevel, Tool, ToolCategory};
/// use toolshelf::storage::MemoryStorage;
///
/// let mut catalog = Catalog::open(MemoryStorage::default());
/// catalog.load_tools(vec![
///     Tool::new("gpt", "ChatGPT", "", vec![ToolCategory::TextGeneration], "", AccessLevel::Free),
/// ]);
/// catalog.dispatch(Event::AddFavorite("gpt".into()));
///
/// assert!(catalog.state().is_favorite("gpt"));
/// ```
pub struct Catalog<S: Storage> {
    state: CatalogState,
    storage: S,
    observers: Vec<Observer>,
}

impl<S: Storage> Catalog<S> {
    /// Builds a catalog, rehydrating persisted preferences and collections.
    ///
    /// Never fails: unreadable records are logged at `warn` and replaced by
    /// defaults (empty favorites and recents, system theme, default view).
    pub fn open(storage: S) -> Self {
        let _span = tracing::debug_span!("catalog_open").entered();

        let preferences = storage.load_preferences().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding unreadable preferences, using defaults");
            None
        });
        let collections = storage.load_collections().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding unreadable collections");
            None
        });

        tracing::debug!(
            has_preferences = preferences.is_some(),
            collection_count = collections.as_ref().map_or(0, Vec::len),
            "catalog rehydrated"
        );

        Self {
            state: CatalogState::new(
                preferences.unwrap_or_default(),
                collections.unwrap_or_default(),
            ),
            storage,
            observers: Vec::new(),
        }
    }

    /// Applies `event`, persists what changed, then notifies observers.
    ///
    /// Returns `true` when the state changed.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let (changed, actions) = handle_event(&mut self.state, event);

        for action in actions {
            self.execute(action);
        }

        if changed {
            for observer in &mut self.observers {
                observer(&self.state);
            }
        }
        changed
    }

    /// Replaces the tool collection. Shorthand for `Event::LoadTools`.
    pub fn load_tools(&mut self, tools: Vec<Tool>) -> bool {
        self.dispatch(Event::LoadTools(tools))
    }

    /// Creates an empty collection, persists it, and returns its id.
    pub fn create_collection(&mut self, input: NewCollection) -> String {
        self.dispatch(Event::CreateCollection(input));
        // Collections are appended, so the newest is last.
        self.state
            .collections()
            .last()
            .map(|collection| collection.id.clone())
            .unwrap_or_default()
    }

    fn execute(&mut self, action: Action) {
        let result = match &action {
            Action::SavePreferences(preferences) => self.storage.save_preferences(preferences),
            Action::SaveCollections(collections) => self.storage.save_collections(collections),
        };
        if let Err(e) = result {
            tracing::error!(error = %e, action = ?action, "failed to persist state");
        }
    }

    /// Registers a callback run after every state-changing dispatch.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&CatalogState) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub const fn state(&self) -> &CatalogState {
        &self.state
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the catalog, returning its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: Storage + fmt::Debug> fmt::Debug for Catalog<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("state", &self.state)
            .field("storage", &self.storage)
            .field("observers", &self.observers.len())
            .finish()
    }
}
