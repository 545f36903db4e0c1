//! MongoDB backend implementation.

use std::fmt::Debug;
use std::time::Duration;

use mongodb::bson::{Document, doc};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};
use serde::{Deserialize, Serialize};

use crate::core::Collection;
use crate::error::{BackendError, StorageError, StorageResult};

/// MongoDB document store.
pub struct MongoBackend {
    client: Client,
    database: Database,
    config: MongoBackendConfig,
}

impl Debug for MongoBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoBackend")
            .field("database", &self.config.database)
            .finish_non_exhaustive()
    }
}

/// Configuration for the MongoDB backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoBackendConfig {
    /// Connection string (`mongodb://...`).
    pub uri: String,

    /// Database holding the collections.
    #[serde(default = "default_database")]
    pub database: String,

    /// How long to wait for a reachable server, in milliseconds.
    #[serde(default = "default_server_selection_timeout_ms")]
    pub server_selection_timeout_ms: u64,

    /// Application name reported to the server.
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

fn default_database() -> String {
    "studyrec".to_string()
}

fn default_server_selection_timeout_ms() -> u64 {
    5000
}

fn default_app_name() -> String {
    "studyrec".to_string()
}

impl MongoBackendConfig {
    /// Creates a config for `uri` and `database` with default timeouts.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            server_selection_timeout_ms: default_server_selection_timeout_ms(),
            app_name: default_app_name(),
        }
    }
}

impl MongoBackend {
    /// Connects to MongoDB.
    ///
    /// The driver connects lazily: an unreachable server surfaces on the
    /// first operation, not here.
    pub async fn connect(config: MongoBackendConfig) -> StorageResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await.map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "mongodb".to_string(),
                message: e.to_string(),
            })
        })?;
        options.server_selection_timeout =
            Some(Duration::from_millis(config.server_selection_timeout_ms));
        options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(options).map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "mongodb".to_string(),
                message: e.to_string(),
            })
        })?;
        let database = client.database(&config.database);

        tracing::info!(database = %config.database, "Connected MongoDB document store");

        Ok(Self {
            client,
            database,
            config,
        })
    }

    /// Creates the indexes the service relies on. Idempotent.
    pub async fn init_indexes(&self) -> StorageResult<()> {
        let saved_items = IndexModel::builder()
            .keys(doc! { "userId": 1, "resourceId": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("saveditem_user_resource".to_string())
                    .build(),
            )
            .build();
        self.collection(Collection::SavedItem)
            .create_index(saved_items)
            .await?;

        let resources = IndexModel::builder()
            .keys(doc! { "metadata.views": -1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("resource_popularity".to_string())
                    .build(),
            )
            .build();
        self.collection(Collection::Resource)
            .create_index(resources)
            .await?;

        Ok(())
    }

    /// Returns a handle to `collection`.
    pub(crate) fn collection(&self, collection: Collection) -> mongodb::Collection<Document> {
        self.database.collection(collection.name())
    }

    /// Returns the database handle.
    pub(crate) fn database(&self) -> &Database {
        &self.database
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &MongoBackendConfig {
        &self.config
    }
}
