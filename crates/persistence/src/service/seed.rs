//! Seed data import.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::core::{Collection, DocumentStore};
use crate::error::{BackendError, StorageResult, ValidationError};
use crate::schema::{Resource, User, Validate, decode, to_document};

use super::{ResourceCatalog, stamp_created};

/// Resources and users loaded from a JSON seed file.
///
/// ```json
/// { "resources": [ { "title": "...", ... } ], "users": [ { "email": "..." } ] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    /// Raw resource payloads.
    #[serde(default)]
    pub resources: Vec<Value>,
    /// Raw user payloads.
    #[serde(default)]
    pub users: Vec<Value>,
}

/// Number of documents a seed import wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Resources inserted.
    pub resources: usize,
    /// Users inserted.
    pub users: usize,
}

impl SeedData {
    /// Parses seed data from a JSON string.
    pub fn from_json(json: &str) -> StorageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads seed data from a JSON file.
    pub async fn from_path(path: impl AsRef<Path>) -> StorageResult<Self> {
        let content = tokio::fs::read_to_string(path.as_ref())
            .await
            .map_err(BackendError::from)?;
        Self::from_json(&content)
    }

    /// Validates every entry, then inserts them all.
    ///
    /// Nothing is written if any entry is invalid.
    pub async fn import<S: DocumentStore>(self, store: &Arc<S>) -> StorageResult<SeedReport> {
        let resources: Vec<Resource> = decode_all("resources", self.resources)?;
        let users: Vec<User> = decode_all("users", self.users)?;

        let catalog = ResourceCatalog::new(Arc::clone(store));
        for resource in &resources {
            catalog.import(resource).await?;
        }

        for user in &users {
            let mut document = to_document(user)?;
            stamp_created(&mut document);
            store.insert_one(Collection::User, document).await?;
        }

        let report = SeedReport {
            resources: resources.len(),
            users: users.len(),
        };
        info!(
            resources = report.resources,
            users = report.users,
            "Imported seed data"
        );
        Ok(report)
    }
}

fn decode_all<T>(section: &str, values: Vec<Value>) -> Result<Vec<T>, ValidationError>
where
    T: serde::de::DeserializeOwned + Validate,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            decode(value).map_err(|e| ValidationError::InvalidDocument {
                entity: format!("{}[{}]", section, i),
                message: e.to_string(),
            })
        })
        .collect()
}
