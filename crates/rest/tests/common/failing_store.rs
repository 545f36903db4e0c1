//! A document store whose every operation fails.

use async_trait::async_trait;
use studyrec_persistence::core::{Collection, DocumentStore, RawDocument, Update, UpdateOutcome};
use studyrec_persistence::error::{BackendError, StorageError, StorageResult};
use studyrec_persistence::query::{Filter, FindOptions};

/// How [`FailingStore`] fails.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    /// The store cannot be reached.
    Unavailable,
    /// The store answers with an internal error.
    Internal,
}

/// Store double for exercising error mapping.
#[derive(Debug, Clone, Copy)]
pub struct FailingStore {
    failure: Failure,
}

impl FailingStore {
    pub fn unavailable() -> Self {
        Self {
            failure: Failure::Unavailable,
        }
    }

    pub fn internal() -> Self {
        Self {
            failure: Failure::Internal,
        }
    }

    fn fail<T>(&self) -> StorageResult<T> {
        let err = match self.failure {
            Failure::Unavailable => BackendError::Unavailable {
                backend_name: "failing".to_string(),
                message: "connection refused by db.internal:27017".to_string(),
            },
            Failure::Internal => BackendError::Internal {
                backend_name: "failing".to_string(),
                message: "corrupt page at offset 4096".to_string(),
                source: None,
            },
        };
        Err(StorageError::Backend(err))
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn find(
        &self,
        _collection: Collection,
        _options: &FindOptions,
    ) -> StorageResult<Vec<RawDocument>> {
        self.fail()
    }

    async fn count(&self, _collection: Collection, _filter: &Filter) -> StorageResult<u64> {
        self.fail()
    }

    async fn insert_one(
        &self,
        _collection: Collection,
        _document: RawDocument,
    ) -> StorageResult<String> {
        self.fail()
    }

    async fn update_one(
        &self,
        _collection: Collection,
        _filter: &Filter,
        _update: Update,
        _upsert: bool,
    ) -> StorageResult<UpdateOutcome> {
        self.fail()
    }

    async fn health_check(&self) -> StorageResult<()> {
        self.fail()
    }

    async fn list_collections(&self) -> StorageResult<Vec<String>> {
        self.fail()
    }
}
