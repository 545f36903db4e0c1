//! Saved items.

use std::sync::Arc;

use tracing::debug;

use crate::core::{Collection, DocumentStore, Update};
use crate::error::StorageResult;
use crate::query::Filter;
use crate::schema::{SavedItem, to_document};

use super::stamp_created;

/// Insert-if-absent bookmarks keyed by (`userId`, `resourceId`).
pub struct SavedItems<S> {
    store: Arc<S>,
}

impl<S> Clone for SavedItems<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DocumentStore> SavedItems<S> {
    /// Creates a saved-items service over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Saves `item` unless the user already saved the resource.
    ///
    /// A single atomic upsert: an existing record is never overwritten, and
    /// concurrent saves of the same pair leave exactly one record.
    pub async fn save(&self, item: &SavedItem) -> StorageResult<()> {
        let filter = Filter::eq("userId", item.user_id.as_str())
            .and(Filter::eq("resourceId", item.resource_id.as_str()));

        let mut document = to_document(item)?;
        stamp_created(&mut document);

        let outcome = self
            .store
            .update_one(
                Collection::SavedItem,
                &filter,
                Update::SetOnInsert(document),
                true,
            )
            .await?;

        debug!(
            user_id = %item.user_id,
            resource_id = %item.resource_id,
            inserted = outcome.inserted(),
            "Saved item"
        );
        Ok(())
    }
}
