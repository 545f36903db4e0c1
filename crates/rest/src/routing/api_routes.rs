//! API route configuration.
//!
//! Defines all routes of the study recommender API.

use axum::{
    Router,
    routing::{get, patch, post},
};
use studyrec_persistence::core::DocumentStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// ## Service
/// - `GET /` - Greeting
/// - `GET /health` - Health check
/// - `GET /test` - Health check (legacy path)
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
/// - `GET /schema` - Model names
///
/// ## API
/// - `GET /api/hello` - Greeting
/// - `GET /api/recommendations` - Paged recommendations
/// - `GET /api/resource/{id}` - Read one resource
/// - `GET /api/search` - Free-text search
/// - `POST /api/roadmap` - Create a roadmap
/// - `PATCH /api/roadmap/{id}` - Partially update a roadmap
/// - `POST /api/saved` - Save a resource
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + 'static,
{
    Router::new()
        // Service routes
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/test", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .route("/schema", get(handlers::schema_handler))
        // Resource routes
        .route("/api/hello", get(handlers::hello_handler))
        .route(
            "/api/recommendations",
            get(handlers::recommendations_handler::<S>),
        )
        .route("/api/resource/{id}", get(handlers::resource_handler::<S>))
        .route("/api/search", get(handlers::search_handler::<S>))
        // Roadmap and saved item routes
        .route("/api/roadmap", post(handlers::create_roadmap_handler::<S>))
        .route(
            "/api/roadmap/{id}",
            patch(handlers::update_roadmap_handler::<S>),
        )
        .route("/api/saved", post(handlers::save_item_handler::<S>))
        .fallback(handlers::not_found_handler)
        // State
        .with_state(state)
}
