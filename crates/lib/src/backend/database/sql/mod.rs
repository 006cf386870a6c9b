//! SQLite backend implementation for Paperboard storage.
//!
//! ## Architecture
//!
//! The backend uses a sqlx `SqlitePool`. The schema is defined in the
//! [`schema`] module and automatically initialized when connecting.

/// Schema definition.
pub mod schema;

use std::any::Any;

use async_trait::async_trait;
use sqlx::{
    Row,
    sqlite::{SqlitePool, SqlitePoolOptions},
};

use crate::{
    Oid, Result,
    backend::{Backend, errors::BackendError},
};

/// Extension trait for sqlx Result types to simplify error handling.
///
/// Similar to `anyhow::Context`, this trait adds a method to convert
/// sqlx errors to `BackendError::SqlxError` with a context message.
pub(crate) trait SqlxResultExt<T> {
    /// Convert sqlx error to BackendError with context message.
    fn sql_context(self, context: &str) -> Result<T>;
}

impl<T> SqlxResultExt<T> for std::result::Result<T, sqlx::Error> {
    fn sql_context(self, context: &str) -> Result<T> {
        self.map_err(|e| {
            BackendError::SqlxError {
                reason: format!("{context}: {e}"),
                source: Some(e),
            }
            .into()
        })
    }
}

/// SQLite-backed implementation of [`Backend`].
pub struct Sqlite {
    pool: SqlitePool,
}

impl Sqlite {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the database file and schema if they don't exist.
    pub async fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        // mode=rwc: read-write-create (create file if it doesn't exist)
        let url = format!("sqlite:{}?mode=rwc", path.as_ref().display());
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .sql_context("Failed to connect to SQLite")?;

        // - journal_mode=WAL: Write-Ahead Logging for better concurrency
        // - synchronous=NORMAL: Balanced durability (safe with WAL)
        // - busy_timeout=5000: Wait up to 5s for locks before failing
        sqlx::query(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )
        .execute(&pool)
        .await
        .sql_context("Failed to configure SQLite")?;

        Self::with_pool(pool).await
    }

    /// Create an in-memory SQLite database.
    ///
    /// The pool keeps exactly one connection alive for its whole lifetime,
    /// since an in-memory database disappears with its last connection.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .sql_context("Failed to open in-memory SQLite")?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self> {
        let backend = Self { pool };
        schema::initialize(&backend).await?;
        Ok(backend)
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn to_sql_serial(oid: &Oid) -> i64 {
    i64::try_from(oid.serial()).unwrap_or(i64::MAX)
}

#[async_trait]
impl Backend for Sqlite {
    async fn allocate(&self, collection: &str) -> Result<u64> {
        let serial: i64 = sqlx::query_scalar(
            "INSERT INTO serials (collection, last_serial) VALUES (?, 1)
             ON CONFLICT(collection) DO UPDATE SET last_serial = last_serial + 1
             RETURNING last_serial",
        )
        .bind(collection)
        .fetch_one(&self.pool)
        .await
        .sql_context("Failed to allocate serial")?;

        u64::try_from(serial).map_err(|_| {
            BackendError::SerialOverflow {
                collection: collection.to_string(),
            }
            .into()
        })
    }

    async fn get(&self, oid: &Oid) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT body FROM objects WHERE collection = ? AND serial = ?")
            .bind(oid.collection())
            .bind(to_sql_serial(oid))
            .fetch_optional(&self.pool)
            .await
            .sql_context("Failed to load object")
    }

    async fn put(&self, oid: &Oid, document: String) -> Result<()> {
        let serial = to_sql_serial(oid);
        sqlx::query(
            "INSERT INTO objects (collection, serial, body) VALUES (?, ?, ?)
             ON CONFLICT(collection, serial) DO UPDATE SET body = excluded.body",
        )
        .bind(oid.collection())
        .bind(serial)
        .bind(document)
        .execute(&self.pool)
        .await
        .sql_context("Failed to store object")?;

        // Keep the counter ahead of explicitly chosen serials
        sqlx::query(
            "INSERT INTO serials (collection, last_serial) VALUES (?, ?)
             ON CONFLICT(collection) DO UPDATE
             SET last_serial = MAX(last_serial, excluded.last_serial)",
        )
        .bind(oid.collection())
        .bind(serial)
        .execute(&self.pool)
        .await
        .sql_context("Failed to update serial counter")?;
        Ok(())
    }

    async fn delete(&self, oid: &Oid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM objects WHERE collection = ? AND serial = ?")
            .bind(oid.collection())
            .bind(to_sql_serial(oid))
            .execute(&self.pool)
            .await
            .sql_context("Failed to delete object")?;
        Ok(result.rows_affected() > 0)
    }

    async fn scan(&self, collection: &str) -> Result<Vec<(Oid, String)>> {
        let rows = sqlx::query(
            "SELECT serial, body FROM objects WHERE collection = ? ORDER BY serial",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await
        .sql_context("Failed to scan collection")?;

        rows.into_iter()
            .map(|row| {
                let serial: i64 = row.try_get("serial").sql_context("Bad serial column")?;
                let body: String = row.try_get("body").sql_context("Bad body column")?;
                Ok((Oid::new(collection, serial as u64), body))
            })
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
