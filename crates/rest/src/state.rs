//! Application state for the REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the document store, the services built on it, and the
//! server configuration.

use std::sync::Arc;

use studyrec_persistence::core::DocumentStore;
use studyrec_persistence::service::{ResourceCatalog, RoadmapService, SavedItems};

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The document store type (must implement [`DocumentStore`])
///
/// # Example
///
/// ```rust,ignore
/// use studyrec_rest::{AppState, ServerConfig};
/// use studyrec_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let state = AppState::new(Arc::new(backend), ServerConfig::default());
/// ```
pub struct AppState<S> {
    store: Arc<S>,
    config: Arc<ServerConfig>,
    catalog: ResourceCatalog<S>,
    roadmaps: RoadmapService<S>,
    saved: SavedItems<S>,
}

// S sits behind Arc and need not be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
            catalog: self.catalog.clone(),
            roadmaps: self.roadmaps.clone(),
            saved: self.saved.clone(),
        }
    }
}

impl<S: DocumentStore> AppState<S> {
    /// Creates the state, building each service over `store`.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            catalog: ResourceCatalog::new(Arc::clone(&store)),
            roadmaps: RoadmapService::new(Arc::clone(&store)),
            saved: SavedItems::new(Arc::clone(&store)),
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a clone of the store Arc.
    pub fn store_arc(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Resource recommendations, lookup and search.
    pub fn catalog(&self) -> &ResourceCatalog<S> {
        &self.catalog
    }

    /// Roadmap creation and updates.
    pub fn roadmaps(&self) -> &RoadmapService<S> {
        &self.roadmaps
    }

    /// Saved items.
    pub fn saved(&self) -> &SavedItems<S> {
        &self.saved
    }
}
