//! Axum extractors for request bodies and query strings.
//!
//! - [`ValidatedJson`] - Decode and validate an entity payload
//! - [`JsonObject`] - Extract a JSON object body (partial updates)
//! - [`ApiQuery`] - Query string extraction with JSON 400 rejections
//! - [`RecommendationParams`] / [`SearchParams`] - Resource query parameters

mod json;
mod query;

pub use json::{JsonObject, ValidatedJson};
pub use query::{ApiQuery, RecommendationParams, SearchParams};
