//! Sort and window options for find operations.

use serde::{Deserialize, Serialize};

use super::filter::Filter;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

/// A sort directive on a dotted field path.
///
/// Documents lacking the field sort lowest, so they come first in ascending
/// order and last in descending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub direction: SortDirection,
}

impl SortDirective {
    /// Parses a sort value (e.g., "-created_at" for descending).
    pub fn parse(s: &str) -> Self {
        if let Some(stripped) = s.strip_prefix('-') {
            Self::descending(stripped)
        } else {
            Self::ascending(s)
        }
    }

    /// Ascending sort on `field`.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `field`.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Options for a find operation: filter, ordering and result window.
///
/// Backends break ties left by `sort` in insertion order, which keeps
/// offset pagination stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindOptions {
    /// Which documents match.
    pub filter: Filter,
    /// Ordering, most significant first.
    pub sort: Vec<SortDirective>,
    /// Number of matching documents to skip.
    pub skip: u64,
    /// Maximum number of documents to return.
    pub limit: Option<u64>,
}

impl FindOptions {
    /// Creates options matching `filter` with store-native order.
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Sets the ordering.
    pub fn with_sort(mut self, sort: Vec<SortDirective>) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the number of documents to skip.
    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the maximum number of documents to return.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}
