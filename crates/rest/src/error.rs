//! Error types for the REST API.
//!
//! Every error is returned as a JSON body `{"detail": ..., "code": ...}`.
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | NotFound | 404 | not-found |
//! | ValidationError | 400 | invalid |
//! | Unavailable / ConnectionFailed / PoolExhausted | 503 | unavailable |
//! | other BackendError | 500 | exception |
//!
//! Store failures are logged and answered with a generic detail; their
//! messages never reach the client.

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use studyrec_persistence::core::Collection;
use studyrec_persistence::error::{ResourceError, StorageError, ValidationError};
use tracing::{error, warn};

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// No document matches the identifier (HTTP 404).
    NotFound {
        /// Collection that was searched.
        collection: String,
        /// The identifier from the request.
        id: String,
    },

    /// No route matches the request path (HTTP 404).
    RouteNotFound {
        /// The request path.
        path: String,
    },

    /// Bad request - validation error (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The document store cannot serve requests (HTTP 503).
    ServiceUnavailable {
        /// Internal message, logged only.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Internal message, logged only.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } | RestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::NotFound { .. } | RestError::RouteNotFound { .. } => "not-found",
            RestError::BadRequest { .. } => "invalid",
            RestError::ServiceUnavailable { .. } => "unavailable",
            RestError::InternalError { .. } => "exception",
        }
    }

    /// Returns the message sent to the client.
    pub fn detail(&self) -> String {
        match self {
            RestError::NotFound { collection, .. } => {
                format!("{} not found", model_name(collection))
            }
            RestError::RouteNotFound { path } => format!("No route for {}", path),
            RestError::BadRequest { message } => message.clone(),
            RestError::ServiceUnavailable { .. } => "Document store unavailable".to_string(),
            RestError::InternalError { .. } => "Internal server error".to_string(),
        }
    }
}

/// "resource" becomes "Resource"; unknown names pass through.
fn model_name(collection: &str) -> &str {
    Collection::ALL
        .iter()
        .find(|c| c.name() == collection)
        .map_or(collection, |c| c.model_name())
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { collection, id } => {
                write!(f, "Not found: {}/{}", collection, id)
            }
            RestError::RouteNotFound { path } => write!(f, "No route for {}", path),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        match &self {
            RestError::ServiceUnavailable { message } => {
                error!(error = %message, "Document store unavailable");
            }
            RestError::InternalError { message } => {
                error!(error = %message, "Request failed");
            }
            RestError::BadRequest { message } => {
                warn!(reason = %message, "Rejected request");
            }
            RestError::NotFound { .. } | RestError::RouteNotFound { .. } => {}
        }

        let body = json!({
            "detail": self.detail(),
            "code": self.code(),
        });
        (self.status(), Json(body)).into_response()
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) if e.is_unavailable() => RestError::ServiceUnavailable {
                message: e.to_string(),
            },
            StorageError::Backend(e) => RestError::InternalError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { collection, id } => RestError::NotFound { collection, id },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

/// Result type for REST handlers.
pub type RestResult<T> = Result<T, RestError>;
