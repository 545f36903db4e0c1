//! Backend-neutral filter predicates.
//!
//! A [`Filter`] describes which documents of a collection match. Each backend
//! compiles it into its own query language (SQL over JSON columns, BSON
//! query documents). String comparisons are never pattern-based: equality is
//! case-folded comparison and substring search is a literal containment test,
//! so user input cannot change the shape of a query.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A filter predicate over the documents of one collection.
///
/// Field names are dotted paths into the document (`metadata.views`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Matches every document.
    #[default]
    All,

    /// Exact equality with a JSON value.
    Eq {
        /// Dotted field path.
        field: String,
        /// Value the field must equal.
        value: Value,
    },

    /// Case-insensitive equality on the full string value.
    EqIgnoreCase {
        /// Dotted field path.
        field: String,
        /// Full value to compare, case-folded.
        value: String,
    },

    /// Case-insensitive literal substring match on a string field.
    ContainsIgnoreCase {
        /// Dotted field path.
        field: String,
        /// Literal text to look for.
        needle: String,
    },

    /// Case-insensitive literal substring match on any string element of an
    /// array field.
    AnyContainsIgnoreCase {
        /// Dotted path of the array field.
        field: String,
        /// Literal text to look for in each element.
        needle: String,
    },

    /// All sub-filters must match.
    And(Vec<Filter>),

    /// At least one sub-filter must match.
    Or(Vec<Filter>),
}

impl Filter {
    /// Creates an exact equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a case-insensitive equality filter.
    pub fn eq_ignore_case(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::EqIgnoreCase {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a case-insensitive substring filter.
    pub fn contains_ignore_case(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Filter::ContainsIgnoreCase {
            field: field.into(),
            needle: needle.into(),
        }
    }

    /// Creates a case-insensitive substring filter over array elements.
    pub fn any_contains_ignore_case(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Filter::AnyContainsIgnoreCase {
            field: field.into(),
            needle: needle.into(),
        }
    }

    /// Returns true if this filter imposes no constraint.
    pub fn is_all(&self) -> bool {
        match self {
            Filter::All => true,
            Filter::And(filters) => filters.iter().all(Filter::is_all),
            _ => false,
        }
    }

    /// Combines two filters with AND, dropping match-all operands.
    pub fn and(self, other: Filter) -> Self {
        match (self, other) {
            (f, Filter::All) | (Filter::All, f) => f,
            (Filter::And(mut left), Filter::And(right)) => {
                left.extend(right);
                Filter::And(left)
            }
            (Filter::And(mut left), f) => {
                left.push(f);
                Filter::And(left)
            }
            (f, Filter::And(mut right)) => {
                right.insert(0, f);
                Filter::And(right)
            }
            (left, right) => Filter::And(vec![left, right]),
        }
    }

    /// Collects `field == value` pairs that hold for every match.
    ///
    /// Used when an upsert inserts a new document: the equality constraints of
    /// the filter become fields of the inserted document.
    pub fn equality_fields(&self) -> Vec<(&str, &Value)> {
        match self {
            Filter::Eq { field, value } => vec![(field.as_str(), value)],
            Filter::And(filters) => filters.iter().flat_map(Filter::equality_fields).collect(),
            _ => Vec::new(),
        }
    }
}
