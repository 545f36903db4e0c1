//! SQLite backend implementation.
//!
//! Stores every collection as JSON documents in one table. Supports both
//! in-memory databases (great for testing) and file-based databases (for
//! development and small deployments).
//!
//! # Example
//!
//! ```no_run
//! use studyrec_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory database
//! let backend = SqliteBackend::in_memory()?;
//!
//! // Initialize the schema
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE documents (
//!     seq INTEGER PRIMARY KEY AUTOINCREMENT,  -- insertion order
//!     collection TEXT NOT NULL,
//!     id TEXT NOT NULL,                        -- the document's _id
//!     body TEXT NOT NULL,                      -- JSON, without _id
//!     UNIQUE (collection, id)
//! );
//!
//! -- One saved item per (userId, resourceId)
//! CREATE UNIQUE INDEX idx_saveditem_user_resource ON documents(
//!     json_extract(body, '$.userId'),
//!     json_extract(body, '$.resourceId')
//! ) WHERE collection = 'saveditem';
//! ```
//!
//! # Matching
//!
//! Filters compile to SQL over `json_extract` and `json_each`.
//! Case-insensitive comparisons use the `casefold` function registered on
//! every pooled connection.

mod backend;
mod schema;
mod sql;
mod store;

pub use backend::{SqliteBackend, SqliteBackendConfig};
