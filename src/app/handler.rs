//! Event handling and state transition logic.
//!
//! Every mutation a presentation layer can request is an [`Event`]. The
//! [`handle_event`] function applies it to the [`CatalogState`] synchronously
//! and reports two things back:
//!
//! 1. whether observers should be notified (the state visibly changed)
//! 2. the [`Action`]s needed to persist what changed
//!
//! Persisted state is compared before and after the mutation, so idempotent
//! requests such as favoriting an already favorited tool produce no save.
//!
//! # Event Types
//!
//! - **Catalog**: `LoadTools`
//! - **Filtering**: `UpdateFilters`, `ReplaceFilters`, `SetSearchTerm`
//! - **Preferences**: `AddFavorite`, `RemoveFavorite`, `ToggleFavorite`,
//!   `RecordViewed`, `ViewTool`, `UpdatePreferences`
//! - **Collections**: `CreateCollection`, `AddToCollection`,
//!   `RemoveFromCollection`, `DeleteCollection`

use crate::app::patch::{FilterPatch, PreferencesPatch};
use crate::app::{Action, CatalogState};
use crate::domain::{FilterCriteria, NewCollection, Tool};

/// Mutations requested by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Replaces the tool collection with a freshly loaded one.
    LoadTools(Vec<Tool>),
    /// Shallow-merges into the active filters.
    UpdateFilters(FilterPatch),
    /// Replaces the active filters wholesale.
    ReplaceFilters(FilterCriteria),
    SetSearchTerm(String),

    AddFavorite(String),
    RemoveFavorite(String),
    ToggleFavorite(String),
    /// Records a tool id as recently viewed, whether or not it is loaded.
    RecordViewed(String),
    /// Records a tool as recently viewed only if it is loaded.
    ViewTool(String),
    UpdatePreferences(PreferencesPatch),

    /// Appends a new, empty collection. [`crate::app::Catalog::create_collection`]
    /// performs the same mutation and returns the generated id.
    CreateCollection(NewCollection),
    AddToCollection {
        collection_id: String,
        tool_id: String,
    },
    RemoveFromCollection {
        collection_id: String,
        tool_id: String,
    },
    DeleteCollection(String),
}

/// Applies `event` to `state` and returns `(changed, actions)`.
///
/// `changed` is `true` when the derived view was recomputed or persisted
/// state changed. Events touching only tools, filters or the search term
/// never produce actions.
///
/// # Example
///
/// ```rust
/// use toolshelf::app::{handle_event, CatalogState, Event};
///
/// let mut state = CatalogState::default();
/// let (changed, actions) = handle_event(&mut state, Event::SetSearchTerm("gpt".into()));
/// assert!(changed);
/// assert!(actions.is_empty());
///
/// let _ = handle_event(&mut state, Event::AddFavorite("a".into()));
/// let (changed, actions) = handle_event(&mut state, Event::AddFavorite("a".into()));
/// assert!(!changed);
/// assert!(actions.is_empty());
/// ```
#[must_use]
pub fn handle_event(state: &mut CatalogState, event: Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event = event_name(&event)).entered();

    let preferences_before = state.preferences().clone();
    let collections_before = state.collections().to_vec();

    let view_recomputed = match event {
        Event::LoadTools(tools) => {
            state.load_tools(tools);
            true
        }
        Event::UpdateFilters(patch) => {
            state.update_filters(patch);
            true
        }
        Event::ReplaceFilters(filters) => {
            state.replace_filters(filters);
            true
        }
        Event::SetSearchTerm(term) => {
            state.set_search_term(term);
            true
        }
        Event::AddFavorite(tool_id) => {
            state.add_favorite(&tool_id);
            false
        }
        Event::RemoveFavorite(tool_id) => {
            state.remove_favorite(&tool_id);
            false
        }
        Event::ToggleFavorite(tool_id) => {
            let favorite = state.toggle_favorite(&tool_id);
            tracing::debug!(tool_id = %tool_id, favorite, "favorite toggled");
            false
        }
        Event::RecordViewed(tool_id) => {
            state.record_viewed(&tool_id);
            false
        }
        Event::ViewTool(tool_id) => {
            let _ = state.view_tool(&tool_id);
            false
        }
        Event::UpdatePreferences(patch) => {
            state.update_preferences(patch);
            false
        }
        Event::CreateCollection(input) => {
            let _ = state.create_collection(input, chrono::Utc::now());
            false
        }
        Event::AddToCollection { collection_id, tool_id } => {
            state.add_tool_to_collection(&collection_id, &tool_id, chrono::Utc::now());
            false
        }
        Event::RemoveFromCollection { collection_id, tool_id } => {
            state.remove_tool_from_collection(&collection_id, &tool_id, chrono::Utc::now());
            false
        }
        Event::DeleteCollection(collection_id) => {
            state.delete_collection(&collection_id);
            false
        }
    };

    let mut actions = Vec::new();
    if state.preferences() != &preferences_before {
        actions.push(Action::SavePreferences(state.preferences().clone()));
    }
    if state.collections() != collections_before.as_slice() {
        actions.push(Action::SaveCollections(state.collections().to_vec()));
    }

    let changed = view_recomputed || !actions.is_empty();
    tracing::debug!(changed, action_count = actions.len(), "event handled");
    (changed, actions)
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::LoadTools(_) => "load_tools",
        Event::UpdateFilters(_) => "update_filters",
        Event::ReplaceFilters(_) => "replace_filters",
        Event::SetSearchTerm(_) => "set_search_term",
        Event::AddFavorite(_) => "add_favorite",
        Event::RemoveFavorite(_) => "remove_favorite",
        Event::ToggleFavorite(_) => "toggle_favorite",
        Event::RecordViewed(_) => "record_viewed",
        Event::ViewTool(_) => "view_tool",
        Event::UpdatePreferences(_) => "update_preferences",
        Event::CreateCollection(_) => "create_collection",
        Event::AddToCollection { .. } => "add_to_collection",
        Event::RemoveFromCollection { .. } => "remove_from_collection",
        Event::DeleteCollection(_) => "delete_collection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::patch::Patch;
    use crate::domain::{AccessLevel, Theme, ToolCategory};

    fn state_with_tools() -> CatalogState {
        let mut state = CatalogState::default();
        let _ = handle_event(
            &mut state,
            Event::LoadTools(vec![
                Tool::new("a", "Alpha", "", vec![ToolCategory::Other], "", AccessLevel::Free),
                Tool::new("b", "Beta", "", vec![ToolCategory::Other], "", AccessLevel::Paid),
            ]),
        );
        state
    }

    #[test]
    fn filtering_events_recompute_without_actions() {
        let mut state = state_with_tools();
        let (changed, actions) = handle_event(
            &mut state,
            Event::UpdateFilters(FilterPatch {
                access_levels: Patch::Set(vec![AccessLevel::Paid]),
                ..Default::default()
            }),
        );
        assert!(changed);
        assert!(actions.is_empty());
        assert_eq!(state.filtered_tools().len(), 1);
    }

    #[test]
    fn favorite_emits_snapshot_once() {
        let mut state = state_with_tools();
        let (changed, actions) = handle_event(&mut state, Event::AddFavorite("a".into()));
        assert!(changed);
        assert_eq!(actions, vec![Action::SavePreferences(state.preferences().clone())]);

        let (changed, actions) = handle_event(&mut state, Event::AddFavorite("a".into()));
        assert!(!changed);
        assert!(actions.is_empty());

        let (_, actions) = handle_event(&mut state, Event::RemoveFavorite("zzz".into()));
        assert!(actions.is_empty());
    }

    #[test]
    fn viewing_records_recent_and_saves() {
        let mut state = state_with_tools();
        let (_, actions) = handle_event(&mut state, Event::ViewTool("b".into()));
        assert_eq!(actions.len(), 1);
        assert_eq!(state.preferences().recent_tools, vec!["b"]);

        let (changed, actions) = handle_event(&mut state, Event::ViewTool("missing".into()));
        assert!(!changed);
        assert!(actions.is_empty());
    }

    #[test]
    fn preference_patch_saves_only_on_change() {
        let mut state = state_with_tools();
        let (_, actions) = handle_event(
            &mut state,
            Event::UpdatePreferences(PreferencesPatch::theme(Theme::System)),
        );
        assert!(actions.is_empty());

        let (_, actions) = handle_event(
            &mut state,
            Event::UpdatePreferences(PreferencesPatch {
                compact_view: Patch::Set(true),
                ..Default::default()
            }),
        );
        assert!(matches!(
            actions.as_slice(),
            [Action::SavePreferences(prefs)] if prefs.compact_view
        ));
    }

    #[test]
    fn collection_events_save_collections() {
        let mut state = state_with_tools();
        let create = Event::CreateCollection(NewCollection::named("Daily", "me"));
        let (_, actions) = handle_event(&mut state, create);
        assert!(matches!(actions.as_slice(), [Action::SaveCollections(c)] if c.len() == 1));

        let collection_id = state.collections()[0].id.clone();
        let add = Event::AddToCollection {
            collection_id: collection_id.clone(),
            tool_id: "a".into(),
        };
        let (_, actions) = handle_event(&mut state, add.clone());
        assert_eq!(actions.len(), 1);
        let (_, actions) = handle_event(&mut state, add);
        assert!(actions.is_empty());

        let (_, actions) = handle_event(&mut state, Event::DeleteCollection(collection_id));
        assert!(matches!(actions.as_slice(), [Action::SaveCollections(c)] if c.is_empty()));
    }
}
