//! Read access to learning resources.

use std::sync::Arc;

use tracing::debug;

use crate::core::{Collection, DocumentStore, RawDocument};
use crate::error::{ResourceError, StorageResult};
use crate::query::{
    FindOptions, ResourceFilters, id_filter, recommendation_filter, recommendation_sort,
    search_filter,
};
use crate::schema::{Resource, to_document};
use crate::types::{PageRequest, Paged, to_public};

use super::stamp_created;

/// Recommendations, lookup and search over the `resource` collection.
///
/// Every returned document has passed through [`to_public`].
pub struct ResourceCatalog<S> {
    store: Arc<S>,
}

impl<S> Clone for ResourceCatalog<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DocumentStore> ResourceCatalog<S> {
    /// Creates a catalog over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns one page of recommended resources.
    ///
    /// Most viewed first, then newest. `meta.total` counts the whole filtered
    /// set; a page past the end has empty `data`.
    pub async fn recommendations(
        &self,
        filters: &ResourceFilters,
        page: PageRequest,
    ) -> StorageResult<Paged<RawDocument>> {
        let filter = recommendation_filter(filters);
        let total = self.store.count(Collection::Resource, &filter).await?;

        let options = FindOptions::new(filter)
            .with_sort(recommendation_sort())
            .with_skip(page.offset())
            .with_limit(page.limit());
        let documents = self.store.find(Collection::Resource, &options).await?;

        debug!(
            page = page.page(),
            limit = page.limit(),
            total,
            returned = documents.len(),
            "Recommendations"
        );

        Ok(Paged::new(
            documents.into_iter().map(to_public).collect(),
            page.meta(total),
        ))
    }

    /// Returns the resource whose `_id` or stored `id` equals `id`.
    pub async fn get(&self, id: &str) -> StorageResult<RawDocument> {
        self.store
            .find_one(Collection::Resource, &id_filter(id))
            .await?
            .map(to_public)
            .ok_or_else(|| {
                ResourceError::NotFound {
                    collection: Collection::Resource.to_string(),
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// Returns up to `limit` resources whose title or tags contain `text`.
    pub async fn search(
        &self,
        text: &str,
        filters: &ResourceFilters,
        limit: u64,
    ) -> StorageResult<Vec<RawDocument>> {
        let options = FindOptions::new(search_filter(text, filters)).with_limit(limit);
        let documents = self.store.find(Collection::Resource, &options).await?;

        debug!(query = text, limit, returned = documents.len(), "Search");

        Ok(documents.into_iter().map(to_public).collect())
    }

    /// Stores a validated resource and returns its id.
    pub async fn import(&self, resource: &Resource) -> StorageResult<String> {
        let mut document = to_document(resource)?;
        stamp_created(&mut document);
        self.store.insert_one(Collection::Resource, document).await
    }
}
