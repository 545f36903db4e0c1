//! Server configuration for the study recommender API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STUDYREC_PORT` | 8000 | Server port |
//! | `STUDYREC_HOST` | 0.0.0.0 | Host to bind |
//! | `STUDYREC_LOG_LEVEL` | info | Log level |
//! | `STUDYREC_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `STUDYREC_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `STUDYREC_ENABLE_CORS` | true | Enable CORS |
//! | `STUDYREC_CORS_ORIGINS` | * | Allowed origins |
//! | `STUDYREC_CORS_METHODS` | * | Allowed methods |
//! | `STUDYREC_CORS_HEADERS` | * | Allowed headers |
//! | `STUDYREC_STORAGE_BACKEND` | sqlite | Document store (sqlite, mongodb) |
//! | `STUDYREC_DATABASE_URL` | - | SQLite path or MongoDB URI |
//! | `STUDYREC_DATABASE_NAME` | studyrec | MongoDB database name |
//! | `STUDYREC_RECOMMENDATION_LIMIT` | 12 | Default recommendations page size |
//! | `STUDYREC_SEARCH_LIMIT` | 20 | Default search result count |
//! | `STUDYREC_MAX_PAGE_SIZE` | 50 | Largest page size |
//! | `STUDYREC_SEED_FILE` | - | JSON seed file imported at startup |
//!
//! # Example
//!
//! ```rust
//! use studyrec_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     enable_cors: false,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use studyrec_persistence::types::{
    DEFAULT_RECOMMENDATION_LIMIT, DEFAULT_SEARCH_LIMIT, MAX_PAGE_SIZE,
};

/// Document store the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StorageBackendMode {
    /// Embedded SQLite database (default).
    #[default]
    Sqlite,
    /// MongoDB server.
    Mongodb,
}

impl StorageBackendMode {
    /// Returns the name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackendMode::Sqlite => "sqlite",
            StorageBackendMode::Mongodb => "mongodb",
        }
    }
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server configuration.
///
/// This struct can be constructed from command line arguments and
/// environment variables using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "studyrec")]
#[command(about = "Study recommender API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "STUDYREC_PORT", default_value = "8000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "STUDYREC_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "STUDYREC_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "STUDYREC_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "STUDYREC_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "STUDYREC_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "STUDYREC_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "STUDYREC_CORS_METHODS", default_value = "*")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "STUDYREC_CORS_HEADERS", default_value = "*")]
    pub cors_headers: String,

    /// Document store backend.
    #[arg(
        long,
        env = "STUDYREC_STORAGE_BACKEND",
        value_enum,
        default_value_t = StorageBackendMode::Sqlite
    )]
    pub storage_backend: StorageBackendMode,

    /// Database location: a SQLite file path or a MongoDB connection URI.
    #[arg(long, env = "STUDYREC_DATABASE_URL")]
    pub database_url: Option<String>,

    /// MongoDB database name.
    #[arg(long, env = "STUDYREC_DATABASE_NAME", default_value = "studyrec")]
    pub database_name: String,

    /// Page size for recommendations when the client sends none.
    #[arg(long, env = "STUDYREC_RECOMMENDATION_LIMIT", default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
    pub recommendation_limit: u64,

    /// Result count for search when the client sends none.
    #[arg(long, env = "STUDYREC_SEARCH_LIMIT", default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub search_limit: u64,

    /// Largest page size any endpoint returns.
    #[arg(long, env = "STUDYREC_MAX_PAGE_SIZE", default_value_t = MAX_PAGE_SIZE)]
    pub max_page_size: u64,

    /// JSON file with resources and users to import at startup.
    #[arg(long, env = "STUDYREC_SEED_FILE")]
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024,
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            storage_backend: StorageBackendMode::Sqlite,
            database_url: None,
            database_name: "studyrec".to_string(),
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            search_limit: DEFAULT_SEARCH_LIMIT,
            max_page_size: MAX_PAGE_SIZE,
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.max_page_size == 0 || self.max_page_size > MAX_PAGE_SIZE {
            errors.push(format!(
                "Max page size must be between 1 and {}",
                MAX_PAGE_SIZE
            ));
        }

        if self.recommendation_limit == 0 || self.recommendation_limit > self.max_page_size {
            errors.push(format!(
                "Recommendation limit must be between 1 and {}",
                self.max_page_size
            ));
        }

        if self.search_limit == 0 || self.search_limit > self.max_page_size {
            errors.push(format!(
                "Search limit must be between 1 and {}",
                self.max_page_size
            ));
        }

        if self.storage_backend == StorageBackendMode::Mongodb && self.database_url.is_none() {
            errors.push("MongoDB backend requires a database URL".to_string());
        }

        if self.database_name.trim().is_empty() {
            errors.push("Database name cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Binds an ephemeral port on localhost, shortens the request timeout and
    /// disables CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.storage_backend, StorageBackendMode::Sqlite);
        assert_eq!(config.recommendation_limit, 12);
        assert_eq!(config.search_limit, 20);
        assert_eq!(config.max_page_size, 50);
        assert!(config.enable_cors);
    }

    #[test]
    fn test_parse_matches_default() {
        let parsed = ServerConfig::try_parse_from(["studyrec"]).unwrap();
        let default = ServerConfig::default();
        assert_eq!(parsed.port, default.port);
        assert_eq!(parsed.host, default.host);
        assert_eq!(parsed.max_page_size, default.max_page_size);
        assert_eq!(parsed.storage_backend, default.storage_backend);
    }

    #[test]
    fn test_parse_backend_flag() {
        let parsed = ServerConfig::try_parse_from([
            "studyrec",
            "--storage-backend",
            "mongodb",
            "--database-url",
            "mongodb://localhost:27017",
        ])
        .unwrap();
        assert_eq!(parsed.storage_backend, StorageBackendMode::Mongodb);
        assert!(parsed.validate().is_ok());

        assert!(ServerConfig::try_parse_from(["studyrec", "--storage-backend", "postgres"]).is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "127.0.0.1".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_validate_valid() {
        assert!(ServerConfig::default().validate().is_ok());
        assert!(ServerConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_all_problems() {
        let config = ServerConfig {
            request_timeout: 0,
            recommendation_limit: 60,
            search_limit: 0,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("timeout")));
    }

    #[test]
    fn test_validate_caps_max_page_size() {
        let config = ServerConfig {
            max_page_size: 500,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors, vec!["Max page size must be between 1 and 50".to_string()]);

        let config = ServerConfig {
            max_page_size: 20,
            recommendation_limit: 10,
            search_limit: 20,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_mongodb_needs_url() {
        let config = ServerConfig {
            storage_backend: StorageBackendMode::Mongodb,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("MongoDB")));
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.request_timeout, 5);
    }
}
