//! DocumentStore implementation for SQLite.

use async_trait::async_trait;
use rusqlite::{OptionalExtension, TransactionBehavior, params_from_iter};
use rusqlite::types::Value as SqlValue;
use serde_json::{Map, Value};

use crate::core::{Collection, DocumentStore, RawDocument, Update, UpdateOutcome};
use crate::error::{BackendError, StorageError, StorageResult};
use crate::query::{Filter, FindOptions};
use crate::types::ID_FIELD;

use super::SqliteBackend;
use super::sql::{SqlFragment, compile_filter, compile_sort};

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn serialization_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::SerializationError { message })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

/// Builds `WHERE collection = ? AND (<filter>)` with its parameters.
fn where_clause(collection: Collection, filter: &Filter) -> StorageResult<SqlFragment> {
    let compiled = compile_filter(filter)?;
    let mut params = Vec::with_capacity(compiled.params.len() + 1);
    params.push(SqlValue::Text(collection.name().to_string()));
    params.extend(compiled.params);
    Ok(SqlFragment {
        sql: format!("WHERE collection = ? AND ({})", compiled.sql),
        params,
    })
}

/// Rebuilds a stored document from its row.
fn decode_row(id: String, body: &str) -> StorageResult<RawDocument> {
    let mut document: RawDocument = serde_json::from_str(body)
        .map_err(|e| serialization_error(format!("Failed to deserialize document: {}", e)))?;
    document.insert(ID_FIELD.to_string(), Value::String(id));
    Ok(document)
}

fn encode_body(document: &RawDocument) -> StorageResult<String> {
    serde_json::to_string(document)
        .map_err(|e| serialization_error(format!("Failed to serialize document: {}", e)))
}

/// Writes `value` at a dotted path, creating intermediate objects.
fn set_path(document: &mut RawDocument, field: &str, value: Value) {
    match field.split_once('.') {
        None => {
            document.insert(field.to_string(), value);
        }
        Some((head, rest)) => {
            let child = document
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(map) = child {
                set_path(map, rest, value);
            }
        }
    }
}

/// Document an upsert inserts: the filter's equality constraints plus the
/// update's fields. Returns the id to use, taken from an `_id` constraint
/// when there is one.
fn upsert_document(filter: &Filter, update: &Update) -> (Option<String>, RawDocument) {
    let mut id = None;
    let mut document = RawDocument::new();
    for (field, value) in filter.equality_fields() {
        if field == ID_FIELD {
            id = value.as_str().map(String::from);
        } else {
            set_path(&mut document, field, value.clone());
        }
    }
    for (key, value) in update.fields() {
        if key != ID_FIELD {
            document.insert(key.clone(), value.clone());
        }
    }
    (id, document)
}

#[async_trait]
impl DocumentStore for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn find(
        &self,
        collection: Collection,
        options: &FindOptions,
    ) -> StorageResult<Vec<RawDocument>> {
        let conn = self.get_connection()?;

        let clause = where_clause(collection, &options.filter)?;
        let order = compile_sort(&options.sort)?;
        let limit = options
            .limit
            .map_or(-1, |l| i64::try_from(l).unwrap_or(i64::MAX));
        let offset = i64::try_from(options.skip).unwrap_or(i64::MAX);

        let sql = format!(
            "SELECT id, body FROM documents {} ORDER BY {} LIMIT ? OFFSET ?",
            clause.sql, order.sql
        );
        let mut params = clause.params;
        params.extend(order.params);
        params.push(SqlValue::Integer(limit));
        params.push(SqlValue::Integer(offset));

        tracing::trace!(sql = %sql, "find");

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| internal_error(format!("Failed to prepare find: {}", e)))?;
        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(|e| internal_error(format!("Failed to run find: {}", e)))?;

        let mut documents = Vec::new();
        for row in rows {
            let (id, body) = row?;
            documents.push(decode_row(id, &body)?);
        }
        Ok(documents)
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let clause = where_clause(collection, filter)?;
        let sql = format!("SELECT COUNT(*) FROM documents {}", clause.sql);

        let count: i64 = conn
            .query_row(&sql, params_from_iter(clause.params.iter()), |row| {
                row.get(0)
            })
            .map_err(|e| internal_error(format!("Failed to count documents: {}", e)))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn insert_one(
        &self,
        collection: Collection,
        mut document: RawDocument,
    ) -> StorageResult<String> {
        let conn = self.get_connection()?;

        document.remove(ID_FIELD);
        let id = uuid::Uuid::new_v4().to_string();
        let body = encode_body(&document)?;

        conn.execute(
            "INSERT INTO documents (collection, id, body) VALUES (?1, ?2, ?3)",
            rusqlite::params![collection.name(), id, body],
        )
        .map_err(|e| internal_error(format!("Failed to insert document: {}", e)))?;

        Ok(id)
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        update: Update,
        upsert: bool,
    ) -> StorageResult<UpdateOutcome> {
        let mut conn = self.get_connection()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        let clause = where_clause(collection, filter)?;
        let sql = format!(
            "SELECT seq, body FROM documents {} ORDER BY seq LIMIT 1",
            clause.sql
        );
        let existing: Option<(i64, String)> = tx
            .query_row(&sql, params_from_iter(clause.params.iter()), |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .optional()
            .map_err(|e| internal_error(format!("Failed to match document: {}", e)))?;

        let outcome = match (existing, update) {
            (Some(_), Update::SetOnInsert(_)) => UpdateOutcome {
                matched: 1,
                modified: 0,
                upserted_id: None,
            },
            (Some((seq, body)), Update::Set(fields)) => {
                let mut document: RawDocument = serde_json::from_str(&body).map_err(|e| {
                    serialization_error(format!("Failed to deserialize document: {}", e))
                })?;
                let mut changed = false;
                for (key, value) in fields {
                    if key == ID_FIELD {
                        continue;
                    }
                    if document.get(&key) != Some(&value) {
                        document.insert(key, value);
                        changed = true;
                    }
                }
                if changed {
                    tx.execute(
                        "UPDATE documents SET body = ?1 WHERE seq = ?2",
                        rusqlite::params![encode_body(&document)?, seq],
                    )
                    .map_err(|e| internal_error(format!("Failed to update document: {}", e)))?;
                }
                UpdateOutcome {
                    matched: 1,
                    modified: u64::from(changed),
                    upserted_id: None,
                }
            }
            (None, update) if upsert => {
                let (id, document) = upsert_document(filter, &update);
                let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
                let inserted = tx.execute(
                    "INSERT INTO documents (collection, id, body) VALUES (?1, ?2, ?3)",
                    rusqlite::params![collection.name(), id, encode_body(&document)?],
                );
                match inserted {
                    Ok(_) => UpdateOutcome {
                        matched: 0,
                        modified: 0,
                        upserted_id: Some(id),
                    },
                    // A unique index already holds an equivalent document.
                    Err(e) if is_unique_violation(&e) => UpdateOutcome {
                        matched: 1,
                        modified: 0,
                        upserted_id: None,
                    },
                    Err(e) => {
                        return Err(internal_error(format!("Failed to upsert document: {}", e)));
                    }
                }
            }
            (None, _) => UpdateOutcome::default(),
        };

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit transaction: {}", e)))?;

        Ok(outcome)
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection().map_err(|_| {
            StorageError::Backend(BackendError::Unavailable {
                backend_name: "sqlite".to_string(),
                message: "Failed to get connection".to_string(),
            })
        })?;
        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|e| internal_error(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    async fn list_collections(&self) -> StorageResult<Vec<String>> {
        let conn = self.get_connection()?;
        let mut stmt = conn
            .prepare("SELECT DISTINCT collection FROM documents ORDER BY collection")
            .map_err(|e| internal_error(format!("Failed to list collections: {}", e)))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }
}
