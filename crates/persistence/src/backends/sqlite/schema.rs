//! SQLite schema definitions.

use rusqlite::Connection;

use crate::error::{BackendError, StorageError, StorageResult};

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

fn schema_error(what: &str, e: rusqlite::Error) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message: format!("Failed to {}: {}", what, e),
        source: None,
    })
}

/// Initialize the database schema. Safe to call on every start.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        create_schema_v1(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version > SCHEMA_VERSION {
        return Err(StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: format!(
                "Database schema version {} is newer than supported version {}",
                current_version, SCHEMA_VERSION
            ),
            source: None,
        }));
    }

    Ok(())
}

/// Get the current schema version.
fn get_schema_version(conn: &Connection) -> StorageResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| schema_error("create schema_version table", e))?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();

    Ok(version.unwrap_or(0))
}

/// Set the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| schema_error("clear schema_version", e))?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
        .map_err(|e| schema_error("set schema_version", e))?;
    Ok(())
}

/// Create the initial schema (version 1).
///
/// Every collection lives in one `documents` table; `seq` records insertion
/// order and breaks sort ties.
fn create_schema_v1(conn: &Connection) -> StorageResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS documents (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            body TEXT NOT NULL,
            UNIQUE (collection, id)
        )",
        [],
    )
    .map_err(|e| schema_error("create documents table", e))?;

    create_indexes(conn)
}

/// Create indexes for efficient queries.
fn create_indexes(conn: &Connection) -> StorageResult<()> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection, seq)",
        "CREATE INDEX IF NOT EXISTS idx_resource_category ON documents(json_extract(body, '$.category'))
            WHERE collection = 'resource'",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_saveditem_user_resource ON documents(
            json_extract(body, '$.userId'),
            json_extract(body, '$.resourceId')
        ) WHERE collection = 'saveditem'",
    ];

    for index_sql in &indexes {
        conn.execute(index_sql, [])
            .map_err(|e| schema_error("create index", e))?;
    }

    Ok(())
}
