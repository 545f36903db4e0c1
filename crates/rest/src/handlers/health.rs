//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and load
//! balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use studyrec_persistence::core::DocumentStore;
use tracing::{debug, error, warn};

use crate::state::AppState;

/// Most collection names reported by the health check.
const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Handler for the health check endpoint.
///
/// Reports the backend, whether the document store answers, and up to ten
/// collection names.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - The document store is reachable
/// - `503 Service Unavailable` - The document store is not reachable
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStore + 'static,
{
    debug!("Processing health check request");

    let store = state.store();
    let backend_name = store.backend_name();
    let timestamp = chrono::Utc::now().to_rfc3339();

    if let Err(e) = store.health_check().await {
        error!(backend = backend_name, error = %e, "Health check failed");
        let body = json!({
            "status": "unhealthy",
            "backend": backend_name,
            "database": "unavailable",
            "collections": [],
            "timestamp": timestamp,
        });
        return (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response();
    }

    let collections = match store.list_collections().await {
        Ok(mut names) => {
            names.truncate(MAX_REPORTED_COLLECTIONS);
            names
        }
        Err(e) => {
            warn!(backend = backend_name, error = %e, "Failed to list collections");
            Vec::new()
        }
    };

    let body = json!({
        "status": "healthy",
        "backend": backend_name,
        "database": "connected",
        "collections": collections,
        "timestamp": timestamp,
    });
    (StatusCode::OK, Json(body)).into_response()
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// Ready once the document store answers a ping.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStore + 'static,
{
    debug!("Processing readiness check request");

    let backend_name = state.store().backend_name();
    let (status, storage) = match state.store().health_check().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            warn!(backend = backend_name, error = %e, "Document store not ready");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let body = json!({
        "status": if status == StatusCode::OK { "ready" } else { "not-ready" },
        "backend": backend_name,
        "checks": {
            "storage": storage
        }
    });
    (status, Json(body)).into_response()
}
