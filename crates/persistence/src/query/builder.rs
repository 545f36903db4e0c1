//! Filters over the resource collection.
//!
//! Turns the optional request parameters of the recommendation and search
//! endpoints into [`Filter`] predicates.
//!
//! | Endpoint | `category` / `level` | free text |
//! |----------|----------------------|-----------|
//! | recommendations | case-insensitive equality | - |
//! | search | case-insensitive substring | `title` or any `tags` element, case-insensitive substring |
//!
//! Empty or absent parameters impose no constraint.

use serde::{Deserialize, Serialize};

use super::filter::Filter;
use super::options::SortDirective;
use crate::types::{ID_FIELD, PUBLIC_ID_FIELD};

/// Field holding the resource category.
pub const CATEGORY_FIELD: &str = "category";
/// Field holding the resource level.
pub const LEVEL_FIELD: &str = "level";
/// Field holding the resource title.
pub const TITLE_FIELD: &str = "title";
/// Field holding the resource tags.
pub const TAGS_FIELD: &str = "tags";
/// Popularity counter used to rank recommendations.
pub const VIEWS_FIELD: &str = "metadata.views";
/// Creation timestamp stamped on insert.
pub const CREATED_AT_FIELD: &str = "created_at";

/// Optional category/level filters shared by recommendations and search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFilters {
    /// Category to filter by.
    pub category: Option<String>,
    /// Level to filter by.
    pub level: Option<String>,
}

impl ResourceFilters {
    /// Creates empty filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the level filter.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    fn category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }

    fn level(&self) -> Option<&str> {
        non_empty(self.level.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Builds the recommendation filter: anchored, case-insensitive equality on
/// `category` and `level`.
pub fn recommendation_filter(filters: &ResourceFilters) -> Filter {
    let mut filter = Filter::All;
    if let Some(category) = filters.category() {
        filter = filter.and(Filter::eq_ignore_case(CATEGORY_FIELD, category));
    }
    if let Some(level) = filters.level() {
        filter = filter.and(Filter::eq_ignore_case(LEVEL_FIELD, level));
    }
    filter
}

/// Builds the search filter.
///
/// `text` must appear in the title or in one of the tags; `category` and
/// `level` are substring filters here, unlike in [`recommendation_filter`].
pub fn search_filter(text: &str, filters: &ResourceFilters) -> Filter {
    let mut filter = Filter::Or(vec![
        Filter::contains_ignore_case(TITLE_FIELD, text),
        Filter::any_contains_ignore_case(TAGS_FIELD, text),
    ]);
    if let Some(category) = filters.category() {
        filter = filter.and(Filter::contains_ignore_case(CATEGORY_FIELD, category));
    }
    if let Some(level) = filters.level() {
        filter = filter.and(Filter::contains_ignore_case(LEVEL_FIELD, level));
    }
    filter
}

/// Ordering for recommendations: most viewed first, then newest.
pub fn recommendation_sort() -> Vec<SortDirective> {
    vec![
        SortDirective::descending(VIEWS_FIELD),
        SortDirective::descending(CREATED_AT_FIELD),
    ]
}

/// Matches a document by its store identifier or by a stored `id` field.
pub fn id_filter(id: &str) -> Filter {
    Filter::Or(vec![
        Filter::eq(ID_FIELD, id),
        Filter::eq(PUBLIC_ID_FIELD, id),
    ])
}
