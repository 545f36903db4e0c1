//! Study Recommender API server.
//!
//! Serves learning resource recommendations, search, roadmaps and saved
//! items over HTTP, backed by SQLite or MongoDB.

use std::sync::Arc;

use clap::Parser;
use studyrec_persistence::DocumentStore;
use studyrec_persistence::service::SeedData;
use studyrec_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use tracing::info;

#[cfg(feature = "sqlite")]
use studyrec_persistence::backends::sqlite::SqliteBackend;

#[cfg(feature = "mongodb")]
use studyrec_persistence::backends::mongodb::{MongoBackend, MongoBackendConfig};

/// Opens the SQLite database and ensures its schema.
#[cfg(feature = "sqlite")]
fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    let db_path = config.database_url.as_deref().unwrap_or("studyrec.db");
    info!(database = %db_path, "Initializing SQLite backend");

    let backend = if db_path == ":memory:" {
        SqliteBackend::in_memory()?
    } else {
        SqliteBackend::open(db_path)?
    };
    backend.init_schema()?;

    Ok(backend)
}

/// Connects to MongoDB and ensures its indexes.
#[cfg(feature = "mongodb")]
async fn create_mongo_backend(config: &ServerConfig) -> anyhow::Result<MongoBackend> {
    let uri = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("The mongodb backend requires --database-url"))?;
    info!(database = %config.database_name, "Initializing MongoDB backend");

    let backend =
        MongoBackend::connect(MongoBackendConfig::new(uri, config.database_name.as_str())).await?;
    backend.init_indexes().await?;

    Ok(backend)
}

/// Imports the configured seed file, if any.
async fn seed<S: DocumentStore>(store: &Arc<S>, config: &ServerConfig) -> anyhow::Result<()> {
    let Some(path) = &config.seed_file else {
        return Ok(());
    };

    info!(path = %path.display(), "Loading seed data");
    let report = SeedData::from_path(path).await?.import(store).await?;
    info!(
        resources = report.resources,
        users = report.users,
        "Seed data loaded"
    );
    Ok(())
}

/// Seeds the store, then binds and serves.
async fn serve<S: DocumentStore + 'static>(store: S, config: ServerConfig) -> anyhow::Result<()> {
    let store = Arc::new(store);
    seed(&store, &config).await?;

    let addr = config.socket_addr();
    let app = create_app_with_config(store, config);

    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %config.storage_backend,
        "Starting Study Recommender API"
    );

    match config.storage_backend {
        StorageBackendMode::Sqlite => start_sqlite(config).await,
        StorageBackendMode::Mongodb => start_mongodb(config).await,
    }
}

#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(&config)?;
    serve(backend, config).await
}

/// Fallback when the sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p studyrec-server --features sqlite"
    )
}

#[cfg(feature = "mongodb")]
async fn start_mongodb(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_mongo_backend(&config).await?;
    serve(backend, config).await
}

/// Fallback when the mongodb feature is not enabled.
#[cfg(not(feature = "mongodb"))]
async fn start_mongodb(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The mongodb backend requires the 'mongodb' feature. \
         Build with: cargo build -p studyrec-server --features mongodb"
    )
}

#[cfg(not(any(feature = "sqlite", feature = "mongodb")))]
compile_error!("At least one document store feature must be enabled");
