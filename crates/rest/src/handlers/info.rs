//! Service information endpoints.

use axum::{Json, http::Uri};
use serde_json::{Value, json};
use studyrec_persistence::schema::MODEL_NAMES;

use crate::error::RestError;

/// `GET /` - service greeting.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hello from the Study Recommender API!" }))
}

/// `GET /api/hello` - API greeting.
pub async fn hello_handler() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}

/// `GET /schema` - names of the entity models.
pub async fn schema_handler() -> Json<Value> {
    Json(json!({ "models": MODEL_NAMES }))
}

/// Fallback for unknown routes.
pub async fn not_found_handler(uri: Uri) -> RestError {
    RestError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
