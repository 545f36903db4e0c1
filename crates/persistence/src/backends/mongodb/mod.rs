//! MongoDB backend implementation.
//!
//! Each collection maps to a native MongoDB collection. Filters become BSON
//! query documents; the saved-item upsert relies on `$setOnInsert` and a
//! unique index on (`userId`, `resourceId`) created by
//! [`MongoBackend::init_indexes`].
//!
//! # Example
//!
//! ```no_run
//! use studyrec_persistence::backends::mongodb::{MongoBackend, MongoBackendConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MongoBackendConfig::new("mongodb://localhost:27017", "studyrec");
//! let backend = MongoBackend::connect(config).await?;
//! backend.init_indexes().await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod store;
mod translate;

pub use backend::{MongoBackend, MongoBackendConfig};
