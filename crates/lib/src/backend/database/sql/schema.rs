//! SQL schema definitions.
//!
//! Every collection shares one `objects` table keyed by (collection, serial);
//! documents are stored as JSON text. Serial counters live in `serials` so
//! that deleting the newest record never frees its serial for reuse.

use crate::Result;
use crate::backend::errors::BackendError;

use super::{Sqlite, SqlxResultExt};

/// Current schema version.
///
/// Increment this when making schema changes that require migration.
pub const SCHEMA_VERSION: i64 = 1;

/// SQL statements to create the schema tables.
pub const CREATE_TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS schema_version (
        version BIGINT PRIMARY KEY
    )",
    "CREATE TABLE IF NOT EXISTS serials (
        collection TEXT PRIMARY KEY NOT NULL,
        last_serial BIGINT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS objects (
        collection TEXT NOT NULL,
        serial BIGINT NOT NULL,
        body TEXT NOT NULL,
        PRIMARY KEY (collection, serial)
    )",
];

/// Initialize the database schema.
///
/// Creates tables if they don't exist and records the schema version. A
/// database written by a newer schema version is refused.
pub async fn initialize(backend: &Sqlite) -> Result<()> {
    let pool = backend.pool();

    for statement in CREATE_TABLES {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| BackendError::SqlxError {
                reason: format!("Schema creation failed: {e} - SQL: {statement}"),
                source: Some(e),
            })?;
    }

    let row: Option<(i64,)> = sqlx::query_as("SELECT version FROM schema_version")
        .fetch_optional(pool)
        .await
        .sql_context("Failed to check schema version")?;

    match row {
        None => {
            sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
                .bind(SCHEMA_VERSION)
                .execute(pool)
                .await
                .sql_context("Failed to initialize schema version")?;
        }
        Some((version,)) if version > SCHEMA_VERSION => {
            return Err(BackendError::SqlxError {
                reason: format!(
                    "database schema version {version} is newer than supported version {SCHEMA_VERSION}"
                ),
                source: None,
            }
            .into());
        }
        Some(_) => {}
    }

    Ok(())
}
