//! Study Recommender Persistence Layer
//!
//! This crate provides the document store layer behind the study recommender
//! service: learning resources, user roadmaps and saved items kept in a
//! document database, plus the query construction and pagination that turn
//! request parameters into store queries.
//!
//! # Features
//!
//! - **Backend-neutral queries**: a small [`Filter`](query::Filter) AST that
//!   each backend compiles to its own query language
//! - **Literal matching**: case-insensitive equality and substring filters
//!   never interpret user input as a pattern
//! - **Stable pagination**: deterministic ordering with insertion-order ties
//! - **Atomic insert-if-absent** for saved items
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! studyrec-persistence = { version = "0.1", features = ["mongodb"] }
//! ```
//!
//! Available backend features:
//! - `sqlite` (default) - SQLite with in-memory and file modes
//! - `mongodb` - MongoDB document storage
//!
//! # Architecture
//!
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`DocumentStore`] trait and collection names
//! - [`query`] - Filters, sorting and the recommendation/search builders
//! - [`types`] - Pagination and the public document shape
//! - [`schema`] - Entity schemas and validation
//! - [`service`] - Domain operations over a store
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use studyrec_persistence::backends::sqlite::SqliteBackend;
//! use studyrec_persistence::query::ResourceFilters;
//! use studyrec_persistence::service::ResourceCatalog;
//! use studyrec_persistence::types::PageRequest;
//!
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let catalog = ResourceCatalog::new(Arc::new(backend));
//! let filters = ResourceFilters::new().with_category("programming");
//! let page = catalog.recommendations(&filters, PageRequest::default()).await?;
//! println!("{} of {}", page.data.len(), page.meta.total);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod query;
pub mod schema;
pub mod service;
pub mod types;

// Re-export commonly used types at crate root
pub use core::{Collection, DocumentStore, RawDocument, Update, UpdateOutcome};
pub use error::{StorageError, StorageResult};
pub use query::{Filter, FindOptions, ResourceFilters};
pub use types::{PageMeta, PageRequest, Paged};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
