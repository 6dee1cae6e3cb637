//! Catalog state container.
//!
//! [`CatalogState`] is the single source of truth for a browsing session. It
//! separates core data (the loaded tools, the active filters, the search term,
//! the user's preferences and collections) from derived data (the filtered
//! tool list) and keeps the two consistent: any change to tools, filters or
//! search term recomputes the filtered list before the method returns.
//!
//! The state performs no I/O. Persisting preferences and collections is the
//! job of [`crate::app::Catalog`], which observes mutations through the event
//! handler's actions.
//!
//! # Example
//!
//! ```rust
//! use toolshelf::app::CatalogState;
//! use toolshelf::domain::{AccessLevel, Tool, ToolCategory};
//!
//! let mut state = CatalogState::default();
//! state.load_tools(vec![
//!     Tool::new("a", "Alpha", "", vec![ToolCategory::Other], "", AccessLevel::Free),
//!     Tool::new("b", "Beta", "", vec![ToolCategory::Other], "", AccessLevel::Free),
//! ]);
//! state.set_search_term("alp");
//! assert_eq!(state.filtered_tools().len(), 1);
//! ```

use crate::app::filter::filter_tools;
use crate::app::patch::{FilterPatch, PreferencesPatch};
use crate::domain::{
    FilterCriteria, NewCollection, Theme, Tool, ToolCategory, ToolCollection, UserPreferences,
};
use chrono::{DateTime, Utc};

/// Central catalog state container.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Every tool from the data source, in source order.
    tools: Vec<Tool>,

    /// Tools matching `filters` and `search_term`, in display order.
    ///
    /// Always equal to `filter_tools(&tools, &filters, &search_term)`.
    filtered_tools: Vec<Tool>,

    filters: FilterCriteria,

    search_term: String,

    /// Persisted between sessions.
    preferences: UserPreferences,

    /// Persisted between sessions.
    collections: Vec<ToolCollection>,
}

impl CatalogState {
    /// Creates a state from rehydrated preferences and collections.
    ///
    /// The tool list starts empty; callers load it from their data source.
    #[must_use]
    pub fn new(preferences: UserPreferences, collections: Vec<ToolCollection>) -> Self {
        Self {
            preferences: preferences.sanitized(),
            collections,
            ..Self::default()
        }
    }

    /// Replaces the full tool collection and recomputes the filtered view.
    pub fn load_tools(&mut self, tools: Vec<Tool>) {
        tracing::debug!(tool_count = tools.len(), "loading tools");
        self.tools = tools;
        self.recompute();
    }

    /// Shallow-merges `patch` into the active filters and recomputes.
    pub fn update_filters(&mut self, patch: FilterPatch) {
        self.filters = patch.apply(&self.filters);
        self.recompute();
    }

    /// Discards the active filters in favour of `filters` and recomputes.
    pub fn replace_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
        self.recompute();
    }

    /// Replaces the search term and recomputes.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered_tools = filter_tools(&self.tools, &self.filters, &self.search_term);
    }

    /// Adds `tool_id` to the favorites. Returns `false` if already favorited.
    pub fn add_favorite(&mut self, tool_id: &str) -> bool {
        self.preferences.add_favorite(tool_id)
    }

    /// Removes `tool_id` from the favorites. Returns `false` if it was not one.
    pub fn remove_favorite(&mut self, tool_id: &str) -> bool {
        self.preferences.remove_favorite(tool_id)
    }

    /// Flips the favorite flag of `tool_id`, returning the new flag.
    pub fn toggle_favorite(&mut self, tool_id: &str) -> bool {
        if self.preferences.remove_favorite(tool_id) {
            false
        } else {
            self.preferences.add_favorite(tool_id)
        }
    }

    /// Moves or inserts `tool_id` at the front of the recently viewed list.
    pub fn record_viewed(&mut self, tool_id: &str) -> bool {
        self.preferences.record_recent(tool_id)
    }

    /// Looks up a tool and, if it exists, records it as recently viewed.
    ///
    /// Unknown ids leave the recents list untouched.
    pub fn view_tool(&mut self, tool_id: &str) -> Option<&Tool> {
        if self.tool(tool_id).is_none() {
            tracing::debug!(tool_id = %tool_id, "viewed tool not found");
            return None;
        }
        self.preferences.record_recent(tool_id);
        self.tool(tool_id)
    }

    /// Shallow-merges `patch` into the preferences.
    pub fn update_preferences(&mut self, patch: PreferencesPatch) {
        self.preferences = patch.apply(&self.preferences);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.theme = theme;
    }

    /// Flips between compact and default list layout, returning the new value.
    pub fn toggle_compact_view(&mut self) -> bool {
        self.preferences.compact_view = !self.preferences.compact_view;
        self.preferences.compact_view
    }

    /// Creates an empty collection and returns its id.
    pub fn create_collection(&mut self, input: NewCollection, now: DateTime<Utc>) -> String {
        let id = uuid::Uuid::new_v4().simple().to_string();
        tracing::debug!(collection_id = %id, name = %input.name, "creating collection");
        self.collections.push(ToolCollection::new(id.clone(), input, now));
        id
    }

    /// Appends `tool_id` to a collection.
    ///
    /// Returns `false` when the collection is unknown or already holds the tool.
    pub fn add_tool_to_collection(
        &mut self,
        collection_id: &str,
        tool_id: &str,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(collection) = self.collection_mut(collection_id) else {
            return false;
        };
        if collection.contains(tool_id) {
            return false;
        }
        collection.tool_ids.push(tool_id.to_string());
        collection.updated_at = Some(now);
        true
    }

    /// Removes `tool_id` from a collection.
    ///
    /// Returns `false` when the collection is unknown or does not hold the tool.
    pub fn remove_tool_from_collection(
        &mut self,
        collection_id: &str,
        tool_id: &str,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(collection) = self.collection_mut(collection_id) else {
            return false;
        };
        let before = collection.tool_ids.len();
        collection.tool_ids.retain(|id| id != tool_id);
        if collection.tool_ids.len() == before {
            return false;
        }
        collection.updated_at = Some(now);
        true
    }

    /// Deletes a collection. Returns `false` if no collection has that id.
    pub fn delete_collection(&mut self, collection_id: &str) -> bool {
        let before = self.collections.len();
        self.collections.retain(|c| c.id != collection_id);
        self.collections.len() != before
    }

    fn collection_mut(&mut self, collection_id: &str) -> Option<&mut ToolCollection> {
        self.collections.iter_mut().find(|c| c.id == collection_id)
    }

    #[must_use]
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// The derived view: tools matching the current filters and search term.
    #[must_use]
    pub fn filtered_tools(&self) -> &[Tool] {
        &self.filtered_tools
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    #[must_use]
    pub fn collections(&self) -> &[ToolCollection] {
        &self.collections
    }

    #[must_use]
    pub fn collection(&self, collection_id: &str) -> Option<&ToolCollection> {
        self.collections.iter().find(|c| c.id == collection_id)
    }

    #[must_use]
    pub fn tool(&self, tool_id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == tool_id)
    }

    #[must_use]
    pub fn is_favorite(&self, tool_id: &str) -> bool {
        self.preferences.is_favorite(tool_id)
    }

    /// Favorited tools in favorites-list order.
    ///
    /// Ids that do not resolve to a loaded tool are skipped.
    #[must_use]
    pub fn favorite_tools(&self) -> Vec<&Tool> {
        self.resolve(&self.preferences.favorite_tools)
    }

    /// Recently viewed tools, most recent first. Unknown ids are skipped.
    #[must_use]
    pub fn recent_tools(&self) -> Vec<&Tool> {
        self.resolve(&self.preferences.recent_tools)
    }

    /// Member tools of a collection, in collection order.
    #[must_use]
    pub fn collection_tools(&self, collection_id: &str) -> Vec<&Tool> {
        self.collection(collection_id)
            .map_or_else(Vec::new, |collection| self.resolve(&collection.tool_ids))
    }

    fn resolve(&self, ids: &[String]) -> Vec<&Tool> {
        ids.iter().filter_map(|id| self.tool(id)).collect()
    }

    /// All loaded tools listing `category`, ignoring filters and search.
    #[must_use]
    pub fn tools_in_category(&self, category: ToolCategory) -> Vec<&Tool> {
        self.tools.iter().filter(|tool| tool.in_category(category)).collect()
    }

    /// Number of loaded tools per category, for every category in catalogue order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(ToolCategory, usize)> {
        ToolCategory::ALL
            .into_iter()
            .map(|category| {
                let count = self.tools.iter().filter(|tool| tool.in_category(category)).count();
                (category, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::patch::Patch;
    use crate::domain::{AccessLevel, SortKey, RECENT_TOOLS_LIMIT};

    fn tool(id: &str, name: &str, category: ToolCategory) -> Tool {
        Tool::new(id, name, "", vec![category], "", AccessLevel::Free)
    }

    fn loaded() -> CatalogState {
        let mut state = CatalogState::default();
        state.load_tools(vec![
            tool("a", "Zeta", ToolCategory::Marketing).with_rating(3.0),
            tool("b", "Alpha", ToolCategory::Business).with_rating(5.0).with_api(true),
            tool("c", "Gamma", ToolCategory::Marketing),
        ]);
        state
    }

    fn ids(tools: &[Tool]) -> Vec<&str> {
        tools.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn loading_tools_applies_current_filters() {
        let mut state = CatalogState::default();
        state.set_search_term("alpha");
        state.load_tools(loaded().tools().to_vec());
        assert_eq!(ids(state.filtered_tools()), ["b"]);
    }

    #[test]
    fn reloading_the_same_tools_is_stable() {
        let mut state = loaded();
        let before = state.filtered_tools().to_vec();
        state.load_tools(state.tools().to_vec());
        assert_eq!(state.filtered_tools(), before.as_slice());
    }

    #[test]
    fn filter_updates_merge_and_replace() {
        let mut state = loaded();
        state.update_filters(FilterPatch {
            sort_by: Patch::Set(SortKey::Name),
            ..Default::default()
        });
        assert_eq!(ids(state.filtered_tools()), ["b", "c", "a"]);

        state.update_filters(FilterPatch {
            categories: Patch::Set(vec![ToolCategory::Marketing]),
            ..Default::default()
        });
        assert_eq!(ids(state.filtered_tools()), ["c", "a"]);
        assert_eq!(state.filters().sort_by, Some(SortKey::Name));

        state.replace_filters(FilterCriteria { has_api: Some(true), ..Default::default() });
        assert_eq!(state.filters().sort_by, None);
        assert_eq!(ids(state.filtered_tools()), ["b"]);
    }

    #[test]
    fn clearing_the_search_term_restores_everything() {
        let mut state = loaded();
        state.set_search_term("nothing matches this");
        assert!(state.filtered_tools().is_empty());
        state.set_search_term("");
        assert_eq!(state.filtered_tools(), state.tools());
    }

    #[test]
    fn toggle_favorite_flips() {
        let mut state = loaded();
        assert!(state.toggle_favorite("a"));
        assert!(state.is_favorite("a"));
        assert!(!state.toggle_favorite("a"));
        assert!(!state.is_favorite("a"));
    }

    #[test]
    fn favorite_and_recent_tools_resolve_in_list_order() {
        let mut state = loaded();
        state.add_favorite("c");
        state.add_favorite("ghost");
        state.add_favorite("a");
        let favorites: Vec<&str> = state.favorite_tools().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(favorites, ["c", "a"]);

        state.record_viewed("a");
        state.record_viewed("b");
        let recents: Vec<&str> = state.recent_tools().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(recents, ["b", "a"]);
    }

    #[test]
    fn viewing_unknown_tool_does_not_touch_recents() {
        let mut state = loaded();
        assert!(state.view_tool("ghost").is_none());
        assert!(state.preferences().recent_tools.is_empty());

        assert_eq!(state.view_tool("b").map(|t| t.name.as_str()), Some("Alpha"));
        assert_eq!(state.preferences().recent_tools, vec!["b"]);
    }

    #[test]
    fn recents_never_exceed_limit() {
        let mut state = loaded();
        for i in 1..=21 {
            state.record_viewed(&i.to_string());
        }
        let recents = &state.preferences().recent_tools;
        assert_eq!(recents.len(), RECENT_TOOLS_LIMIT);
        assert_eq!(recents[0], "21");
        assert!(!recents.iter().any(|id| id == "1"));
    }

    #[test]
    fn category_counts_cover_every_category() {
        let state = loaded();
        let counts = state.category_counts();
        assert_eq!(counts.len(), ToolCategory::ALL.len());
        assert!(counts.contains(&(ToolCategory::Marketing, 2)));
        assert!(counts.contains(&(ToolCategory::Business, 1)));
        assert!(counts.contains(&(ToolCategory::Education, 0)));
        assert_eq!(state.tools_in_category(ToolCategory::Marketing).len(), 2);
    }

    #[test]
    fn preferences_patch_and_view_toggles() {
        let mut state = loaded();
        state.update_preferences(PreferencesPatch::theme(Theme::Dark));
        assert_eq!(state.preferences().theme, Theme::Dark);
        assert!(state.toggle_compact_view());
        assert!(!state.toggle_compact_view());
        state.set_theme(Theme::Light);
        assert_eq!(state.preferences().theme, Theme::Light);
    }

    #[test]
    fn collections_add_and_remove_tools() {
        let mut state = loaded();
        let now = Utc::now();
        let id = state.create_collection(NewCollection::named("Writing", "me"), now);

        assert!(state.add_tool_to_collection(&id, "a", now));
        assert!(!state.add_tool_to_collection(&id, "a", now));
        assert!(state.add_tool_to_collection(&id, "c", now));
        assert!(!state.add_tool_to_collection("unknown", "a", now));

        let members: Vec<&str> = state
            .collection_tools(&id)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(members, ["a", "c"]);
        assert_eq!(state.collection(&id).and_then(|c| c.updated_at), Some(now));

        assert!(state.remove_tool_from_collection(&id, "a", now));
        assert!(!state.remove_tool_from_collection(&id, "a", now));
        assert!(state.delete_collection(&id));
        assert!(state.collections().is_empty());
    }

    #[test]
    fn new_state_sanitizes_rehydrated_preferences() {
        let prefs = UserPreferences {
            favorite_tools: vec!["a".into(), "a".into()],
            ..Default::default()
        };
        let state = CatalogState::new(prefs, vec![]);
        assert_eq!(state.preferences().favorite_tools, vec!["a"]);
    }
}
