//! Error types for the persistence layer.
//!
//! This module defines all error types used throughout the persistence layer,
//! following a hierarchy that separates missing documents, validation failures
//! and document store failures.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Document lookup errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Payload, patch and paging validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Document store errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns true if the document store could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::Backend(e) if e.is_unavailable())
    }
}

/// Errors related to document lookup.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// No document in the collection matches the identifier.
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },
}

/// Errors raised when a payload fails schema constraints.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A whole document could not be decoded into its schema.
    #[error("invalid {entity}: {message}")]
    InvalidDocument { entity: String, message: String },

    /// A single field violates its constraint.
    #[error("invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },

    /// A required field is absent or empty.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },

    /// Page or limit is out of range.
    #[error("invalid pagination: {message}")]
    InvalidPagination { message: String },
}

impl ValidationError {
    pub(crate) fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors originating from the document store.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The store is not configured or not reachable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the store failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// Internal store error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

impl BackendError {
    /// Returns true for errors that mean the store cannot serve requests at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            BackendError::Unavailable { .. }
                | BackendError::ConnectionFailed { .. }
                | BackendError::PoolExhausted { .. }
        )
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        BackendError::Internal {
            backend_name: "unknown".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(_err: r2d2::Error) -> Self {
        StorageError::Backend(BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        })
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for StorageError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match *err.kind {
            ErrorKind::ServerSelection { .. } | ErrorKind::ConnectionPoolCleared { .. } => {
                StorageError::Backend(BackendError::Unavailable {
                    backend_name: "mongodb".to_string(),
                    message: err.to_string(),
                })
            }
            _ => StorageError::Backend(BackendError::Internal {
                backend_name: "mongodb".to_string(),
                message: err.to_string(),
                source: Some(Box::new(err)),
            }),
        }
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::bson::ser::Error> for StorageError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}
