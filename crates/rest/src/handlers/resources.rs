//! Resource endpoints: recommendations, lookup, search.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use studyrec_persistence::core::{DocumentStore, RawDocument};
use studyrec_persistence::types::Paged;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{ApiQuery, RecommendationParams, SearchParams};
use crate::state::AppState;

/// Handler for listing recommendations.
///
/// Most viewed first, then newest, one page at a time.
///
/// # HTTP Request
///
/// `GET [base]/api/recommendations?category=&level=&page=&limit=`
///
/// # Response
///
/// - `200 OK` - `{data: [...], meta: {page, limit, total}}`
/// - `400 Bad Request` - page or limit out of range
pub async fn recommendations_handler<S>(
    State(state): State<AppState<S>>,
    ApiQuery(params): ApiQuery<RecommendationParams>,
) -> RestResult<Json<Paged<RawDocument>>>
where
    S: DocumentStore + 'static,
{
    let config = state.config();
    let page = params.page_request(config.recommendation_limit, config.max_page_size)?;

    debug!(
        category = ?params.category,
        level = ?params.level,
        user_id = ?params.user_id,
        page = page.page(),
        limit = page.limit(),
        "Processing recommendations request"
    );

    let result = state.catalog().recommendations(&params.filters(), page).await?;
    Ok(Json(result))
}

/// Handler for reading one resource.
///
/// `id` matches the store `_id` or an `id` field carried by the resource.
///
/// # HTTP Request
///
/// `GET [base]/api/resource/{id}`
pub async fn resource_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<RawDocument>>
where
    S: DocumentStore + 'static,
{
    debug!(id = %id, "Processing resource read request");

    let resource = state.catalog().get(&id).await?;
    Ok(Json(resource))
}

/// Handler for free-text search.
///
/// # HTTP Request
///
/// `GET [base]/api/search?q=&category=&level=&limit=`
///
/// # Response
///
/// - `200 OK` - `{data: [...]}`
/// - `400 Bad Request` - `q` is missing
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> RestResult<Json<Value>>
where
    S: DocumentStore + 'static,
{
    let text = params.text()?;
    let config = state.config();
    let limit = params.limit(config.search_limit, config.max_page_size);

    debug!(query = text, limit, "Processing search request");

    let data = state
        .catalog()
        .search(text, &params.filters(), limit)
        .await?;
    Ok(Json(json!({ "data": data })))
}
