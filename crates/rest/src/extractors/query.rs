//! Query string extractors for the resource endpoints.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use studyrec_persistence::ResourceFilters;
use studyrec_persistence::error::ValidationResult;
use studyrec_persistence::types::{DEFAULT_PAGE, PageRequest, clamp_limit};

use crate::error::RestError;

/// Axum `Query` whose rejection is a JSON 400.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: e.body_text(),
            })?;
        Ok(ApiQuery(query))
    }
}

/// Query parameters of `GET /api/recommendations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationParams {
    /// Category, matched whole and case-insensitively.
    pub category: Option<String>,
    /// Level, matched whole and case-insensitively.
    pub level: Option<String>,
    /// 1-based page number.
    pub page: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    /// Requesting user. Accepted for compatibility; it does not affect results.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl RecommendationParams {
    /// Returns the category/level filters.
    pub fn filters(&self) -> ResourceFilters {
        ResourceFilters {
            category: self.category.clone(),
            level: self.level.clone(),
        }
    }

    /// Validates page and limit, filling in defaults.
    pub fn page_request(&self, default_limit: u64, max_limit: u64) -> ValidationResult<PageRequest> {
        let page = self.page.unwrap_or(DEFAULT_PAGE as i64);
        let limit = self
            .limit
            .unwrap_or_else(|| i64::try_from(default_limit).unwrap_or(i64::MAX));
        PageRequest::new(page, limit, max_limit)
    }
}

/// Query parameters of `GET /api/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Free text matched against title and tags.
    pub q: Option<String>,
    /// Category substring.
    pub category: Option<String>,
    /// Level substring.
    pub level: Option<String>,
    /// Result count, clamped rather than rejected.
    pub limit: Option<i64>,
}

impl SearchParams {
    /// Returns the search text, which is required (but may be empty).
    pub fn text(&self) -> Result<&str, RestError> {
        self.q.as_deref().ok_or_else(|| RestError::BadRequest {
            message: "Missing required query parameter 'q'".to_string(),
        })
    }

    /// Returns the category/level filters.
    pub fn filters(&self) -> ResourceFilters {
        ResourceFilters {
            category: self.category.clone(),
            level: self.level.clone(),
        }
    }

    /// Returns the result count clamped into `1..=max_limit`.
    pub fn limit(&self, default_limit: u64, max_limit: u64) -> u64 {
        clamp_limit(self.limit, default_limit, max_limit)
    }
}
