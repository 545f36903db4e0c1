//! # studyrec-rest - HTTP API for the study recommender
//!
//! This crate exposes learning-resource recommendations, search, roadmaps
//! and saved items over HTTP, on top of any
//! [`DocumentStore`](studyrec_persistence::core::DocumentStore).
//!
//! ## Backend Support
//!
//! Document stores are selected through feature flags:
//!
//! - `sqlite` - SQLite backend (default)
//! - `mongodb` - MongoDB backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use studyrec_rest::{create_app, ServerConfig};
//! use studyrec_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("studyrec.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | recommendations | GET | `/api/recommendations?category&level&page&limit` |
//! | read resource | GET | `/api/resource/{id}` |
//! | search | GET | `/api/search?q&category&level&limit` |
//! | create roadmap | POST | `/api/roadmap` |
//! | update roadmap | PATCH | `/api/roadmap/{id}` |
//! | save item | POST | `/api/saved` |
//! | health | GET | `/health`, `/_liveness`, `/_readiness` |
//! | models | GET | `/schema` |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"detail": ..., "code": ...}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Validation error or malformed request |
//! | 404 | not-found | No such resource, roadmap or route |
//! | 500 | exception | Internal server error |
//! | 503 | unavailable | Document store unavailable |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and their JSON responses
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, services, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Body and query extractors
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use studyrec_persistence::core::DocumentStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: DocumentStore + 'static,
{
    create_app_with_config(Arc::new(store), ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up every route together with the tracing, timeout, body limit and
/// (when enabled) CORS layers.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use studyrec_rest::{create_app_with_config, ServerConfig};
/// use studyrec_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// backend.init_schema()?;
/// let config = ServerConfig {
///     port: 3000,
///     ..Default::default()
/// };
/// let app = create_app_with_config(Arc::new(backend), config);
/// ```
pub fn create_app_with_config<S>(store: Arc<S>, config: ServerConfig) -> Router
where
    S: DocumentStore + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        store.backend_name()
    );

    let state = AppState::new(store, config.clone());

    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "studyrec_rest={level},studyrec_persistence={level},studyrec={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
