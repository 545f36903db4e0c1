//! Pagination types for list endpoints.
//!
//! Recommendations use strict page-number pagination: out-of-range values are
//! rejected. Search uses a single clamped window with no page number.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// First page number.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used by recommendations when the client sends none.
pub const DEFAULT_RECOMMENDATION_LIMIT: u64 = 12;

/// Result count used by search when the client sends none.
pub const DEFAULT_SEARCH_LIMIT: u64 = 20;

/// Largest page size any endpoint returns.
pub const MAX_PAGE_SIZE: u64 = 50;

/// A validated page-number request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Validates a raw page/limit pair.
    ///
    /// `page` must be at least 1 and `limit` must lie in `1..=max_limit`.
    pub fn new(page: i64, limit: i64, max_limit: u64) -> ValidationResult<Self> {
        let page = u64::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or_else(|| ValidationError::InvalidPagination {
                message: format!("page must be >= 1, got {}", page),
            })?;

        let limit = u64::try_from(limit)
            .ok()
            .filter(|l| (1..=max_limit).contains(l))
            .ok_or_else(|| ValidationError::InvalidPagination {
                message: format!("limit must be between 1 and {}, got {}", max_limit, limit),
            })?;

        Ok(Self { page, limit })
    }

    /// Returns the page number (1-based).
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Returns the page size.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of documents before this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Builds the response metadata for this page.
    pub fn meta(&self, total: u64) -> PageMeta {
        PageMeta {
            page: self.page,
            limit: self.limit,
            total,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

/// Page metadata returned alongside the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// The page number that was requested.
    pub page: u64,
    /// The page size that was requested.
    pub limit: u64,
    /// Number of documents in the full filtered set.
    pub total: u64,
}

/// A page of results: `{data: [...], meta: {page, limit, total}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    /// Documents on this page.
    pub data: Vec<T>,
    /// Paging metadata.
    pub meta: PageMeta,
}

impl<T> Paged<T> {
    /// Creates a page.
    pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self { data, meta }
    }

    /// Returns true if the page holds no documents.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maps the documents to another type.
    pub fn map<U, F>(self, f: F) -> Paged<U>
    where
        F: FnMut(T) -> U,
    {
        Paged {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Clamps a requested result count into `1..=max`, using `default` when absent.
pub fn clamp_limit(requested: Option<i64>, default: u64, max: u64) -> u64 {
    match requested {
        None => default.clamp(1, max),
        Some(n) if n < 1 => 1,
        Some(n) => u64::try_from(n).map_or(max, |n| n.min(max)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 12);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_page_request_offset() {
        let req = PageRequest::new(3, 12, MAX_PAGE_SIZE).unwrap();
        assert_eq!(req.offset(), 24);
    }

    #[test]
    fn test_page_request_bounds() {
        assert!(PageRequest::new(1, 1, MAX_PAGE_SIZE).is_ok());
        assert!(PageRequest::new(1, 50, MAX_PAGE_SIZE).is_ok());

        assert!(matches!(
            PageRequest::new(0, 12, MAX_PAGE_SIZE),
            Err(ValidationError::InvalidPagination { .. })
        ));
        assert!(PageRequest::new(-4, 12, MAX_PAGE_SIZE).is_err());
        assert!(PageRequest::new(1, 0, MAX_PAGE_SIZE).is_err());
        assert!(PageRequest::new(1, 51, MAX_PAGE_SIZE).is_err());
    }

    #[test]
    fn test_page_meta() {
        let req = PageRequest::new(2, 2, MAX_PAGE_SIZE).unwrap();
        let meta = req.meta(5);
        assert_eq!(meta, PageMeta { page: 2, limit: 2, total: 5 });
    }

    #[test]
    fn test_paged_serializes_envelope() {
        let page = Paged::new(vec![1, 2], PageMeta { page: 1, limit: 2, total: 7 });
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert_eq!(json["meta"]["total"], 7);
    }

    #[test]
    fn test_paged_map() {
        let page = Paged::new(vec![1, 2, 3], PageMeta { page: 1, limit: 3, total: 3 });
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.data, vec![10, 20, 30]);
        assert_eq!(mapped.meta.total, 3);
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None, DEFAULT_SEARCH_LIMIT, MAX_PAGE_SIZE), 20);
        assert_eq!(clamp_limit(Some(0), DEFAULT_SEARCH_LIMIT, MAX_PAGE_SIZE), 1);
        assert_eq!(clamp_limit(Some(-3), DEFAULT_SEARCH_LIMIT, MAX_PAGE_SIZE), 1);
        assert_eq!(clamp_limit(Some(7), DEFAULT_SEARCH_LIMIT, MAX_PAGE_SIZE), 7);
        assert_eq!(clamp_limit(Some(500), DEFAULT_SEARCH_LIMIT, MAX_PAGE_SIZE), 50);
    }
}
