//! Core types for the persistence layer.
//!
//! - [`PageRequest`], [`PageMeta`], [`Paged`] - page-number pagination and
//!   the `{data, meta}` envelope
//! - [`to_public`] - turns stored documents into their client shape
//!
//! # Pagination
//!
//! ```
//! use studyrec_persistence::types::{PageRequest, MAX_PAGE_SIZE};
//!
//! let page = PageRequest::new(3, 12, MAX_PAGE_SIZE).unwrap();
//! assert_eq!(page.offset(), 24);
//!
//! assert!(PageRequest::new(0, 12, MAX_PAGE_SIZE).is_err());
//! ```

mod document;
mod pagination;

pub use document::{ID_FIELD, PUBLIC_ID_FIELD, stringify_id, to_public};
pub use pagination::{
    DEFAULT_PAGE, DEFAULT_RECOMMENDATION_LIMIT, DEFAULT_SEARCH_LIMIT, MAX_PAGE_SIZE, PageMeta,
    PageRequest, Paged, clamp_limit,
};
