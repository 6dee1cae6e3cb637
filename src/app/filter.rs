//! Filter and sort engine for tool collections.
//!
//! [`filter_tools`] is a pure function from `(tools, criteria, search term)` to
//! a new ordered list. It runs a fixed pipeline where each stage is skipped
//! when its criterion is absent:
//!
//! 1. Text search over name, description and tags (case-insensitive substring)
//! 2. Category overlap
//! 3. Access level membership
//! 4. Tag overlap
//! 5. Exact API availability
//! 6. Minimum rating (missing rating counts as `0`)
//! 7. Stable sort by the requested key
//!
//! The input slice is never modified. An empty input or a criteria set that
//! excludes everything yields an empty list.

use crate::domain::{FilterCriteria, SortKey, SortOrder, Tool};
use std::cmp::Ordering;

/// Applies the search term and filter criteria to `tools`.
///
/// # Examples
///
/// ```
/// use toolshelf::app::filter_tools;
/// use toolshelf::domain::{AccessLevel, FilterCriteria, SortKey, Tool, ToolCategory};
///
/// let tools = vec![
///     Tool::new("a", "Zeta", "", vec![ToolCategory::Other], "", AccessLevel::Free)
///         .with_rating(3.0),
///     Tool::new("b", "Alpha", "", vec![ToolCategory::Other], "", AccessLevel::Free)
///         .with_rating(5.0),
/// ];
///
/// let filters = FilterCriteria { sort_by: Some(SortKey::Name), ..Default::default() };
/// let names: Vec<_> = filter_tools(&tools, &filters, "")
///     .into_iter()
///     .map(|tool| tool.name)
///     .collect();
///
/// assert_eq!(names, ["Alpha", "Zeta"]);
/// ```
#[must_use]
pub fn filter_tools(tools: &[Tool], filters: &FilterCriteria, search_term: &str) -> Vec<Tool> {
    let _span = tracing::debug_span!("filter_tools",
        total_tools = tools.len(),
        search_len = search_term.len(),
        active_filters = filters.active_count(),
        sort_by = ?filters.sort_by
    ).entered();

    let needle = search_term.to_lowercase();
    let categories = non_empty(filters.categories.as_deref());
    let access_levels = non_empty(filters.access_levels.as_deref());
    let tags = non_empty(filters.tags.as_deref());

    let mut filtered: Vec<Tool> = tools
        .iter()
        .filter(|tool| needle.is_empty() || matches_search(tool, &needle))
        .filter(|tool| {
            categories.map_or(true, |wanted| tool.categories.iter().any(|c| wanted.contains(c)))
        })
        .filter(|tool| access_levels.map_or(true, |wanted| wanted.contains(&tool.access_level)))
        .filter(|tool| {
            tags.map_or(true, |wanted| wanted.iter().any(|tag| tool.tags().contains(tag)))
        })
        .filter(|tool| {
            filters.has_api.map_or(true, |has_api| tool.api_available == Some(has_api))
        })
        .filter(|tool| filters.min_rating.map_or(true, |min| tool.rating_or_zero() >= min))
        .cloned()
        .collect();

    if let Some(sort_by) = filters.sort_by {
        sort_tools(&mut filtered, sort_by, filters.sort_order.unwrap_or_default());
    }

    tracing::debug!(filtered_count = filtered.len(), "tool filter applied");
    filtered
}

/// Sorts `tools` in place by `key`. The sort is stable.
///
/// Numeric keys compare highest first under [`SortOrder::Asc`]; `Newest`
/// places new-flagged tools first. [`SortOrder::Desc`] negates whichever
/// comparison the key defines.
pub fn sort_tools(tools: &mut [Tool], key: SortKey, order: SortOrder) {
    tools.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_by_key(a: &Tool, b: &Tool, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        SortKey::Popularity => compare_desc(a.popularity_or_zero(), b.popularity_or_zero()),
        SortKey::Rating => compare_desc(a.rating_or_zero(), b.rating_or_zero()),
        // false < true, so comparing b to a puts new tools first
        SortKey::Newest => b.is_new().cmp(&a.is_new()),
    }
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn matches_search(tool: &Tool, needle: &str) -> bool {
    tool.name.to_lowercase().contains(needle)
        || tool.description.to_lowercase().contains(needle)
        || tool.tags().iter().any(|tag| tag.to_lowercase().contains(needle))
}

fn non_empty<T>(values: Option<&[T]>) -> Option<&[T]> {
    values.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccessLevel, ToolCategory};

    fn tool(id: &str, name: &str) -> Tool {
        Tool::new(
            id,
            name,
            format!("{name} description"),
            vec![ToolCategory::Other],
            "https://example.com",
            AccessLevel::Free,
        )
    }

    fn names(tools: &[Tool]) -> Vec<&str> {
        tools.iter().map(|t| t.name.as_str()).collect()
    }

    fn sample() -> Vec<Tool> {
        vec![
            Tool::new(
                "gpt",
                "ChatGPT",
                "Conversational assistant",
                vec![ToolCategory::TextGeneration, ToolCategory::Productivity],
                "",
                AccessLevel::Freemium,
            )
            .with_rating(4.8)
            .with_popularity(99.0)
            .with_api(true)
            .with_tags(["chat", "LLM"]),
            Tool::new(
                "mj",
                "Midjourney",
                "Images from prompts",
                vec![ToolCategory::ImageGeneration],
                "",
                AccessLevel::Paid,
            )
            .with_rating(4.6)
            .with_popularity(90.0)
            .with_new(true)
            .with_tags(["art"]),
            Tool::new(
                "copilot",
                "Copilot",
                "Pair programmer",
                vec![ToolCategory::CodeGeneration, ToolCategory::Development],
                "",
                AccessLevel::Paid,
            )
            .with_popularity(95.0)
            .with_api(false),
            Tool::new(
                "deepl",
                "DeepL",
                "Translation for GPT era",
                vec![ToolCategory::LanguageTranslation],
                "",
                AccessLevel::Freemium,
            )
            .with_rating(4.5)
            .with_new(true),
        ]
    }

    #[test]
    fn empty_criteria_preserve_input_order() {
        let tools = sample();
        assert_eq!(filter_tools(&tools, &FilterCriteria::default(), ""), tools);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let filters = FilterCriteria {
            sort_by: Some(SortKey::Rating),
            min_rating: Some(1.0),
            ..Default::default()
        };
        assert!(filter_tools(&[], &filters, "gpt").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_name_description_and_tags() {
        let tools = sample();
        let upper = filter_tools(&tools, &FilterCriteria::default(), "GPT");
        let lower = filter_tools(&tools, &FilterCriteria::default(), "gpt");
        assert_eq!(upper, lower);
        assert_eq!(names(&upper), ["ChatGPT", "DeepL"]);

        let by_tag = filter_tools(&tools, &FilterCriteria::default(), "llm");
        assert_eq!(names(&by_tag), ["ChatGPT"]);
    }

    #[test]
    fn category_filter_keeps_exactly_the_overlapping_tools() {
        let tools = sample();
        let wanted = vec![ToolCategory::Productivity, ToolCategory::Development];
        let filters = FilterCriteria { categories: Some(wanted.clone()), ..Default::default() };
        let result = filter_tools(&tools, &filters, "");

        for tool in &tools {
            let overlaps = tool.categories.iter().any(|c| wanted.contains(c));
            assert_eq!(result.contains(tool), overlaps, "tool {}", tool.id);
        }
    }

    #[test]
    fn empty_filter_lists_place_no_constraint() {
        let tools = sample();
        let filters = FilterCriteria {
            categories: Some(vec![]),
            access_levels: Some(vec![]),
            tags: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(filter_tools(&tools, &filters, "").len(), tools.len());
    }

    #[test]
    fn access_level_and_tag_filters_match_membership() {
        let tools = sample();
        let paid = FilterCriteria {
            access_levels: Some(vec![AccessLevel::Paid]),
            ..Default::default()
        };
        assert_eq!(names(&filter_tools(&tools, &paid, "")), ["Midjourney", "Copilot"]);

        let tagged = FilterCriteria {
            tags: Some(vec!["art".into(), "missing".into()]),
            ..Default::default()
        };
        assert_eq!(names(&filter_tools(&tools, &tagged, "")), ["Midjourney"]);
    }

    #[test]
    fn api_filter_is_an_exact_match() {
        let tools = sample();
        let with_api = FilterCriteria { has_api: Some(true), ..Default::default() };
        assert_eq!(names(&filter_tools(&tools, &with_api, "")), ["ChatGPT"]);

        // unset availability is not the same as `false`
        let without_api = FilterCriteria { has_api: Some(false), ..Default::default() };
        assert_eq!(names(&filter_tools(&tools, &without_api, "")), ["Copilot"]);
    }

    #[test]
    fn min_rating_treats_missing_rating_as_zero() {
        let tools = sample();
        let filters = FilterCriteria { min_rating: Some(4.6), ..Default::default() };
        assert_eq!(names(&filter_tools(&tools, &filters, "")), ["ChatGPT", "Midjourney"]);

        let zero = FilterCriteria { min_rating: Some(0.0), ..Default::default() };
        assert_eq!(filter_tools(&tools, &zero, "").len(), tools.len());
    }

    #[test]
    fn name_sort_ascending_and_descending() {
        let tools = vec![tool("a", "Zeta"), tool("b", "Alpha"), tool("c", "beta")];
        let asc = FilterCriteria { sort_by: Some(SortKey::Name), ..Default::default() };
        assert_eq!(names(&filter_tools(&tools, &asc, "")), ["Alpha", "beta", "Zeta"]);

        let desc = FilterCriteria {
            sort_by: Some(SortKey::Name),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        assert_eq!(names(&filter_tools(&tools, &desc, "")), ["Zeta", "beta", "Alpha"]);
    }

    #[test]
    fn rating_sort_defaults_to_highest_first() {
        let tools = vec![tool("a", "Zeta").with_rating(3.0), tool("b", "Alpha").with_rating(5.0)];
        let filters = FilterCriteria { sort_by: Some(SortKey::Rating), ..Default::default() };
        assert_eq!(names(&filter_tools(&tools, &filters, "")), ["Alpha", "Zeta"]);

        let reversed = FilterCriteria { sort_order: Some(SortOrder::Desc), ..filters };
        assert_eq!(names(&filter_tools(&tools, &reversed, "")), ["Zeta", "Alpha"]);
    }

    #[test]
    fn popularity_sort_treats_missing_score_as_zero() {
        let tools = vec![tool("a", "None"), tool("b", "Some").with_popularity(10.0)];
        let filters = FilterCriteria { sort_by: Some(SortKey::Popularity), ..Default::default() };
        assert_eq!(names(&filter_tools(&tools, &filters, "")), ["Some", "None"]);
    }

    #[test]
    fn newest_sort_is_a_stable_partition() {
        let tools = vec![
            tool("1", "Old A"),
            tool("2", "New A").with_new(true),
            tool("3", "Old B").with_new(false),
            tool("4", "New B").with_new(true),
        ];
        let filters = FilterCriteria { sort_by: Some(SortKey::Newest), ..Default::default() };
        assert_eq!(
            names(&filter_tools(&tools, &filters, "")),
            ["New A", "New B", "Old A", "Old B"]
        );

        let desc = FilterCriteria { sort_order: Some(SortOrder::Desc), ..filters };
        assert_eq!(names(&filter_tools(&tools, &desc, "")), ["Old A", "Old B", "New A", "New B"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let tools = vec![tool("a", "Zeta"), tool("b", "Alpha")];
        let snapshot = tools.clone();
        let filters = FilterCriteria { sort_by: Some(SortKey::Name), ..Default::default() };
        let _ = filter_tools(&tools, &filters, "");
        assert_eq!(tools, snapshot);
    }
}
