//! Core storage traits and abstractions.
//!
//! - [`DocumentStore`] - collection-scoped find / count / insert / update
//! - [`Collection`] - the collections the service reads and writes
//! - [`Update`], [`UpdateOutcome`] - arguments and result of `update_one`
//!
//! # Example: Implementing a Store
//!
//! ```ignore
//! use async_trait::async_trait;
//! use studyrec_persistence::core::{Collection, DocumentStore, RawDocument};
//! use studyrec_persistence::query::FindOptions;
//! use studyrec_persistence::error::StorageResult;
//!
//! struct MyStore;
//!
//! #[async_trait]
//! impl DocumentStore for MyStore {
//!     fn backend_name(&self) -> &'static str {
//!         "my-store"
//!     }
//!
//!     async fn find(
//!         &self,
//!         collection: Collection,
//!         options: &FindOptions,
//!     ) -> StorageResult<Vec<RawDocument>> {
//!         todo!()
//!     }
//!
//!     // ... implement the remaining methods
//! }
//! ```

mod collection;
mod store;

pub use collection::Collection;
pub use store::{DocumentStore, RawDocument, Update, UpdateOutcome};
