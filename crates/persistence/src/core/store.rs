//! Core document store trait.
//!
//! This module defines the [`DocumentStore`] trait, the collection-scoped
//! find / count / insert / update surface every backend implements. The
//! services in [`crate::service`] are written against this trait only, so
//! they run unchanged on the sqlite and MongoDB backends and on test doubles.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::core::Collection;
use crate::error::StorageResult;
use crate::query::{Filter, FindOptions};

/// A document as stored, including the store-internal `_id`.
pub type RawDocument = Map<String, Value>;

/// A top-level update applied by [`DocumentStore::update_one`].
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Assigns each field on the first matching document, replacing any
    /// previous value. When an upsert inserts, the fields are written too.
    Set(RawDocument),

    /// Fields written only when the upsert inserts a new document. A matched
    /// document is left untouched.
    SetOnInsert(RawDocument),
}

impl Update {
    /// Returns the fields carried by this update.
    pub fn fields(&self) -> &RawDocument {
        match self {
            Update::Set(fields) | Update::SetOnInsert(fields) => fields,
        }
    }
}

/// Result of [`DocumentStore::update_one`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Number of documents that matched the filter (0 or 1).
    pub matched: u64,
    /// Number of documents actually changed.
    pub modified: u64,
    /// Identifier of the inserted document, when the upsert inserted.
    pub upserted_id: Option<String>,
}

impl UpdateOutcome {
    /// Returns true if the update inserted a new document.
    pub fn inserted(&self) -> bool {
        self.upserted_id.is_some()
    }
}

/// Collection-scoped access to a document database.
///
/// # Ordering
///
/// `find` honours [`FindOptions::sort`]; documents lacking a sort field sort
/// lowest, and ties are broken in insertion order so that offset pagination
/// over an unchanged collection never repeats or skips a document.
///
/// # Atomicity
///
/// `update_one` with `upsert = true` is a single atomic operation: two
/// concurrent upserts with the same equality filter produce one document.
/// Backends treat a lost race against their unique indexes as a match.
///
/// # Example
///
/// ```ignore
/// use studyrec_persistence::core::{Collection, DocumentStore};
/// use studyrec_persistence::query::{Filter, FindOptions};
///
/// async fn newest<S: DocumentStore>(store: &S) -> StorageResult<()> {
///     let options = FindOptions::new(Filter::All)
///         .with_sort(vec![SortDirective::descending("created_at")])
///         .with_limit(5);
///     let docs = store.find(Collection::Resource, &options).await?;
///     println!("{} resources", docs.len());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns a human-readable name for this store.
    fn backend_name(&self) -> &'static str;

    /// Returns the documents matching `options`, in order.
    async fn find(
        &self,
        collection: Collection,
        options: &FindOptions,
    ) -> StorageResult<Vec<RawDocument>>;

    /// Returns the first document matching `filter`, if any.
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> StorageResult<Option<RawDocument>> {
        let options = FindOptions::new(filter.clone()).with_limit(1);
        Ok(self.find(collection, &options).await?.into_iter().next())
    }

    /// Counts the documents matching `filter`.
    async fn count(&self, collection: Collection, filter: &Filter) -> StorageResult<u64>;

    /// Inserts a new document and returns its generated identifier.
    ///
    /// A `_id` already present in `document` is replaced.
    async fn insert_one(
        &self,
        collection: Collection,
        document: RawDocument,
    ) -> StorageResult<String>;

    /// Applies `update` to the first document matching `filter`.
    ///
    /// With `upsert = true` and no match, inserts a document built from the
    /// equality constraints of `filter` plus the update's fields.
    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        update: Update,
        upsert: bool,
    ) -> StorageResult<UpdateOutcome>;

    /// Checks that the store answers requests.
    async fn health_check(&self) -> StorageResult<()>;

    /// Lists the collections that currently hold documents.
    async fn list_collections(&self) -> StorageResult<Vec<String>>;
}
