//! Backend creation and utility functions.

use std::path::PathBuf;

use paperboard::backend::{
    Backend as StorageBackend,
    database::{InMemory, Sqlite},
};

use crate::cli::{Backend, BackendConfig};

/// File name of the SQLite database inside the data directory
pub const SQLITE_FILE: &str = "paperboard.db";
/// File name of the in-memory backend's JSON snapshot inside the data directory
pub const JSON_FILE: &str = "paperboard.json";

/// Path of the JSON snapshot written on shutdown by the in-memory backend.
pub fn json_path(config: &BackendConfig) -> PathBuf {
    config.data_dir().join(JSON_FILE)
}

/// Short backend name for display and the health endpoint.
pub fn backend_label(config: &BackendConfig) -> &'static str {
    match config.backend {
        Backend::Sqlite => "sqlite",
        Backend::Inmemory => "inmemory",
    }
}

/// Create the appropriate backend based on configuration
///
/// A missing JSON snapshot starts a fresh in-memory store; an unreadable one
/// is an error, so a later shutdown cannot overwrite it.
pub async fn create_backend(
    config: &BackendConfig,
) -> Result<Box<dyn StorageBackend>, Box<dyn std::error::Error>> {
    let data_dir = config.data_dir();

    // Ensure data directory exists
    tokio::fs::create_dir_all(&data_dir).await?;

    match config.backend {
        Backend::Sqlite => {
            let db_path = data_dir.join(SQLITE_FILE);
            tracing::info!("Using SQLite backend at {}", db_path.display());
            Ok(Box::new(Sqlite::open(&db_path).await?))
        }
        Backend::Inmemory => {
            let json_path = data_dir.join(JSON_FILE);
            tracing::info!(
                "Using in-memory backend with persistence at {}",
                json_path.display()
            );
            let backend = InMemory::load_from_file(&json_path).await.map_err(|e| {
                format!("Failed to load {}: {e}", json_path.display())
            })?;
            if backend.is_empty().await {
                tracing::info!("Starting with fresh database");
            } else {
                tracing::info!("Loaded existing data from {}", json_path.display());
            }
            Ok(Box::new(backend))
        }
    }
}
