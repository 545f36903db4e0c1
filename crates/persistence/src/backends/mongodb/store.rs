//! DocumentStore implementation for MongoDB.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Bson, Document, doc};
use mongodb::error::{ErrorKind, WriteFailure};

use crate::core::{Collection, DocumentStore, RawDocument, Update, UpdateOutcome};
use crate::error::{BackendError, StorageError, StorageResult};
use crate::query::{Filter, FindOptions};
use crate::types::{ID_FIELD, stringify_id};

use super::MongoBackend;
use super::translate::{filter_to_document, limit_count, skip_count, sort_to_document};

const DUPLICATE_KEY: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY,
        _ => false,
    }
}

/// Converts a BSON document into JSON; ObjectIds become `{"$oid": hex}`.
fn to_raw(document: Document) -> StorageResult<RawDocument> {
    match Bson::Document(document).into_relaxed_extjson() {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(StorageError::Backend(BackendError::SerializationError {
            message: format!("expected a document, got {}", other),
        })),
    }
}

fn bson_id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => stringify_id(&other.into_relaxed_extjson()),
    }
}

#[async_trait]
impl DocumentStore for MongoBackend {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn find(
        &self,
        collection: Collection,
        options: &FindOptions,
    ) -> StorageResult<Vec<RawDocument>> {
        let filter = filter_to_document(&options.filter)?;
        let sort = sort_to_document(&options.sort);

        let coll = self.collection(collection);
        let mut action = coll.find(filter).sort(sort).skip(skip_count(options.skip));
        if let Some(limit) = options.limit {
            action = action.limit(limit_count(limit));
        }

        let documents: Vec<Document> = action.await?.try_collect().await?;
        documents.into_iter().map(to_raw).collect()
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> StorageResult<u64> {
        let filter = filter_to_document(filter)?;
        Ok(self.collection(collection).count_documents(filter).await?)
    }

    async fn insert_one(
        &self,
        collection: Collection,
        mut document: RawDocument,
    ) -> StorageResult<String> {
        document.remove(ID_FIELD);
        let document = bson::to_document(&document)?;
        let result = self.collection(collection).insert_one(document).await?;
        Ok(bson_id_to_string(result.inserted_id))
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        update: Update,
        upsert: bool,
    ) -> StorageResult<UpdateOutcome> {
        let query = filter_to_document(filter)?;
        let update = match update {
            Update::Set(mut fields) => {
                fields.remove(ID_FIELD);
                doc! { "$set": bson::to_document(&fields)? }
            }
            Update::SetOnInsert(mut fields) => {
                fields.remove(ID_FIELD);
                doc! { "$setOnInsert": bson::to_document(&fields)? }
            }
        };

        let result = self
            .collection(collection)
            .update_one(query, update)
            .upsert(upsert)
            .await;

        match result {
            Ok(result) => Ok(UpdateOutcome {
                matched: result.matched_count,
                modified: result.modified_count,
                upserted_id: result.upserted_id.map(bson_id_to_string),
            }),
            // A concurrent upsert inserted the same key first.
            Err(e) if upsert && is_duplicate_key(&e) => Ok(UpdateOutcome {
                matched: 1,
                modified: 0,
                upserted_id: None,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn health_check(&self) -> StorageResult<()> {
        self.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn list_collections(&self) -> StorageResult<Vec<String>> {
        let mut names = self.database().list_collection_names().await?;
        names.sort();
        Ok(names)
    }
}
