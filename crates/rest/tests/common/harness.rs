//! REST API test harness.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::Value;
use studyrec_persistence::backends::sqlite::SqliteBackend;
use studyrec_persistence::core::{Collection, DocumentStore};
use studyrec_persistence::query::Filter;
use studyrec_persistence::schema::{Resource, decode};
use studyrec_persistence::service::ResourceCatalog;
use studyrec_rest::{ServerConfig, create_app_with_config};

/// A test server with direct access to its store.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let harness = RestTestHarness::new();
///     let ids = harness.seed_resources(vec![ResourceFixture::new("Go").build()]).await;
///
///     let response = harness.server.get(&format!("/api/resource/{}", ids[0])).await;
///     response.assert_status_ok();
/// }
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The store behind the server.
    pub backend: Arc<SqliteBackend>,
}

impl RestTestHarness {
    /// Creates a harness with the test configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        backend.init_schema().expect("Failed to init schema");
        let backend = Arc::new(backend);

        let app = create_app_with_config(Arc::clone(&backend), config);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, backend }
    }

    /// Imports resource payloads in order and returns their ids.
    pub async fn seed_resources(&self, resources: Vec<Value>) -> Vec<String> {
        let catalog = ResourceCatalog::new(Arc::clone(&self.backend));
        let mut ids = Vec::with_capacity(resources.len());
        for payload in resources {
            let resource: Resource = decode(payload).expect("Invalid resource fixture");
            ids.push(catalog.import(&resource).await.expect("Failed to seed resource"));
        }
        ids
    }

    /// Counts the documents in a collection.
    pub async fn count(&self, collection: Collection) -> u64 {
        self.backend
            .count(collection, &Filter::All)
            .await
            .expect("Failed to count documents")
    }

    /// Reads a stored document by `_id`.
    pub async fn stored(&self, collection: Collection, id: &str) -> Option<Value> {
        self.backend
            .find_one(collection, &Filter::eq("_id", id))
            .await
            .expect("Failed to read document")
            .map(Value::Object)
    }
}
