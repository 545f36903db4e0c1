//! Roadmap lifecycle.

use std::sync::Arc;

use tracing::debug;

use crate::core::{Collection, DocumentStore, Update};
use crate::error::{ResourceError, StorageResult};
use crate::query::Filter;
use crate::schema::{Roadmap, RoadmapPatch, to_document};
use crate::types::ID_FIELD;

use super::{stamp_created, stamp_updated};

/// Creates and updates documents in the `roadmap` collection.
pub struct RoadmapService<S> {
    store: Arc<S>,
}

impl<S> Clone for RoadmapService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DocumentStore> RoadmapService<S> {
    /// Creates a roadmap service over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Persists a validated roadmap and returns its id.
    pub async fn create(&self, roadmap: &Roadmap) -> StorageResult<String> {
        let mut document = to_document(roadmap)?;
        stamp_created(&mut document);

        let id = self.store.insert_one(Collection::Roadmap, document).await?;
        debug!(id = %id, items = roadmap.items.len(), "Created roadmap");
        Ok(id)
    }

    /// Applies `patch` to the roadmap with `_id == id`.
    ///
    /// Each patched key replaces the stored value; `updated_at` is refreshed.
    /// Fails with `NotFound`, changing nothing, when no roadmap matches.
    pub async fn update(&self, id: &str, patch: RoadmapPatch) -> StorageResult<()> {
        let mut fields = patch.into_fields();
        stamp_updated(&mut fields);

        let outcome = self
            .store
            .update_one(
                Collection::Roadmap,
                &Filter::eq(ID_FIELD, id),
                Update::Set(fields),
                false,
            )
            .await?;

        if outcome.matched == 0 {
            return Err(ResourceError::NotFound {
                collection: Collection::Roadmap.to_string(),
                id: id.to_string(),
            }
            .into());
        }

        debug!(id = %id, modified = outcome.modified, "Updated roadmap");
        Ok(())
    }
}
