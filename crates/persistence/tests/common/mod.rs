//! Test infrastructure for the persistence layer.
//!
//! Provides an initialized in-memory store and resource fixtures.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::sync::Arc;

use studyrec_persistence::backends::sqlite::SqliteBackend;
use studyrec_persistence::schema::{Resource, decode};
use studyrec_persistence::service::ResourceCatalog;

/// Creates an in-memory SQLite store with the schema in place.
pub fn create_backend() -> Arc<SqliteBackend> {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to initialize schema");
    Arc::new(backend)
}

/// Imports `fixtures` in order and returns their ids.
pub async fn seed_resources(
    store: &Arc<SqliteBackend>,
    fixtures: Vec<ResourceFixture>,
) -> Vec<String> {
    let catalog = ResourceCatalog::new(Arc::clone(store));
    let mut ids = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        let resource: Resource = decode(fixture.build()).expect("invalid fixture");
        ids.push(catalog.import(&resource).await.expect("import failed"));
    }
    ids
}
