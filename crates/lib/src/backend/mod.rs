//! Backend implementations for Paperboard storage
//!
//! The [`Backend`] trait is the raw document interface every storage engine
//! implements: it hands out serial numbers, and stores and scans JSON
//! documents keyed by [`Oid`]. Typed access lives one layer up in
//! [`store::Table`](crate::store::Table), which keeps record logic
//! independent of the storage mechanism.

use std::any::Any;

use async_trait::async_trait;

use crate::{Oid, Result};

pub mod database;
pub mod errors;

pub use errors::BackendError;

/// Storage engine for JSON documents grouped into collections.
///
/// All implementations must be `Send` and `Sync` to allow sharing across
/// request handlers, and implement `Any` to allow for downcasting (for
/// example to persist an in-memory backend on shutdown).
///
/// Implementations serialize their own access; no operation spans more than
/// one document, and there are no transactions.
#[async_trait]
pub trait Backend: Send + Sync + Any {
    /// Allocates the next serial number for `collection`.
    ///
    /// Serials start at 1, strictly increase, and are never reused, even
    /// after the record holding one is deleted.
    async fn allocate(&self, collection: &str) -> Result<u64>;

    /// Fetches the document stored under `oid`, if any.
    async fn get(&self, oid: &Oid) -> Result<Option<String>>;

    /// Stores `document` under `oid`, replacing any previous document.
    async fn put(&self, oid: &Oid, document: String) -> Result<()>;

    /// Removes the document stored under `oid`.
    ///
    /// Returns whether a document was present.
    async fn delete(&self, oid: &Oid) -> Result<bool>;

    /// Returns every document of `collection` in serial order.
    async fn scan(&self, collection: &str) -> Result<Vec<(Oid, String)>>;

    /// Returns a reference to the backend as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}
