//! Partial updates for filter criteria and user preferences.
//!
//! A patch names only the fields it changes. Each field is a [`Patch`] with
//! three states, so "leave as is" and "clear" stay distinct:
//!
//! - [`Patch::Keep`]: field absent from the update, current value survives
//! - [`Patch::Set`]: new value overrides the current one
//! - [`Patch::Clear`]: field is reset (`None` for filters, default for preferences)

use crate::domain::{
    AccessLevel, FilterCriteria, SortKey, SortOrder, Theme, ToolCategory, UserPreferences,
};

/// Update instruction for a single field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    #[default]
    Keep,
    Set(T),
    Clear,
}

impl<T> Patch<T> {
    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    /// Merges into an optional field.
    fn merge_option(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Set(value) => Some(value),
            Self::Clear => None,
        }
    }

    /// Merges into a field whose cleared state is its default value.
    fn merge_value(self, current: T) -> T
    where
        T: Default,
    {
        match self {
            Self::Keep => current,
            Self::Set(value) => value,
            Self::Clear => T::default(),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// `Some` sets the field and `None` clears it.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Clear, Self::Set)
    }
}

/// Partial update of [`FilterCriteria`].
///
/// # Examples
///
/// ```
/// use toolshelf::app::{FilterPatch, Patch};
/// use toolshelf::domain::{FilterCriteria, SortKey};
///
/// let current = FilterCriteria {
///     has_api: Some(true),
///     min_rating: Some(4.0),
///     ..Default::default()
/// };
/// let patch = FilterPatch {
///     sort_by: Patch::Set(SortKey::Name),
///     min_rating: Patch::Clear,
///     ..Default::default()
/// };
///
/// let merged = patch.apply(&current);
/// assert_eq!(merged.has_api, Some(true));
/// assert_eq!(merged.min_rating, None);
/// assert_eq!(merged.sort_by, Some(SortKey::Name));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterPatch {
    pub categories: Patch<Vec<ToolCategory>>,
    pub access_levels: Patch<Vec<AccessLevel>>,
    pub tags: Patch<Vec<String>>,
    pub has_api: Patch<bool>,
    pub min_rating: Patch<f64>,
    pub sort_by: Patch<SortKey>,
    pub sort_order: Patch<SortOrder>,
}

impl FilterPatch {
    /// Returns `true` if the patch leaves every field untouched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.categories.is_keep()
            && self.access_levels.is_keep()
            && self.tags.is_keep()
            && self.has_api.is_keep()
            && self.min_rating.is_keep()
            && self.sort_by.is_keep()
            && self.sort_order.is_keep()
    }

    /// Merges the patch over `current`, returning the new criteria.
    #[must_use]
    pub fn apply(self, current: &FilterCriteria) -> FilterCriteria {
        let current = current.clone();
        FilterCriteria {
            categories: self.categories.merge_option(current.categories),
            access_levels: self.access_levels.merge_option(current.access_levels),
            tags: self.tags.merge_option(current.tags),
            has_api: self.has_api.merge_option(current.has_api),
            min_rating: self.min_rating.merge_option(current.min_rating),
            sort_by: self.sort_by.merge_option(current.sort_by),
            sort_order: self.sort_order.merge_option(current.sort_order),
        }
    }
}

impl From<FilterCriteria> for FilterPatch {
    /// Sets every present field and keeps the absent ones, mirroring a
    /// shallow merge of a partial record.
    fn from(criteria: FilterCriteria) -> Self {
        fn keep_or_set<T>(value: Option<T>) -> Patch<T> {
            value.map_or(Patch::Keep, Patch::Set)
        }

        Self {
            categories: keep_or_set(criteria.categories),
            access_levels: keep_or_set(criteria.access_levels),
            tags: keep_or_set(criteria.tags),
            has_api: keep_or_set(criteria.has_api),
            min_rating: keep_or_set(criteria.min_rating),
            sort_by: keep_or_set(criteria.sort_by),
            sort_order: keep_or_set(criteria.sort_order),
        }
    }
}

/// Partial update of [`UserPreferences`].
///
/// Clearing a field restores its default: an empty list, the system theme,
/// or the non-compact view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreferencesPatch {
    pub favorite_tools: Patch<Vec<String>>,
    pub recent_tools: Patch<Vec<String>>,
    pub preferred_categories: Patch<Vec<ToolCategory>>,
    pub theme: Patch<Theme>,
    pub compact_view: Patch<bool>,
}

impl PreferencesPatch {
    #[must_use]
    pub fn compact_view(compact: bool) -> Self {
        Self { compact_view: Patch::Set(compact), ..Default::default() }
    }

    #[must_use]
    pub fn theme(theme: Theme) -> Self {
        Self { theme: Patch::Set(theme), ..Default::default() }
    }

    /// Merges the patch over `current`.
    ///
    /// The result is sanitized, so list fields set through a patch still obey
    /// the favorites and recents invariants.
    #[must_use]
    pub fn apply(self, current: &UserPreferences) -> UserPreferences {
        let current = current.clone();
        UserPreferences {
            favorite_tools: self.favorite_tools.merge_value(current.favorite_tools),
            recent_tools: self.recent_tools.merge_value(current.recent_tools),
            preferred_categories: self
                .preferred_categories
                .merge_value(current.preferred_categories),
            theme: self.theme.merge_value(current.theme),
            compact_view: self.compact_view.merge_value(current.compact_view),
        }
        .sanitized()
    }
}
