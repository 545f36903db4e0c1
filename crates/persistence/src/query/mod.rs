//! Query construction.
//!
//! - [`Filter`] - backend-neutral predicates
//! - [`FindOptions`], [`SortDirective`] - ordering and result window
//! - [`builder`] - filters for the recommendation and search endpoints

pub mod builder;
mod filter;
mod options;

pub use builder::{ResourceFilters, id_filter, recommendation_filter, recommendation_sort, search_filter};
pub use filter::Filter;
pub use options::{FindOptions, SortDirection, SortDirective};
