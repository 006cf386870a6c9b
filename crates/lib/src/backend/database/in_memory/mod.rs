//! In-memory database backend implementation
//!
//! This module provides an in-memory implementation of the [`Backend`] trait,
//! suitable for testing, development, or small deployments that persist the
//! whole state to a JSON file on shutdown.

mod persistence;

use std::{
    any::Any,
    collections::{BTreeMap, HashMap},
    path::Path,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    Oid, Result,
    backend::{Backend, errors::BackendError},
};

/// Documents and serial counters, kept under one lock.
#[derive(Debug, Clone, Default)]
pub(crate) struct State {
    /// collection -> serial -> JSON document
    pub(crate) documents: HashMap<String, BTreeMap<u64, String>>,
    /// collection -> last serial handed out
    pub(crate) serials: HashMap<String, u64>,
}

/// A simple in-memory backend using `HashMap`s for storage.
///
/// It provides basic persistence capabilities via `save_to_file` and
/// `load_from_file`, serializing the whole state to JSON.
#[derive(Debug, Default)]
pub struct InMemory {
    pub(crate) state: RwLock<State>,
}

impl InMemory {
    /// Creates a new, empty `InMemory` backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the entire state to a file as JSON.
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persistence::save_to_file(self, path).await
    }

    /// Loads the state from a JSON file.
    ///
    /// A missing file yields an empty backend.
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        persistence::load_from_file(path).await
    }

    /// Total number of stored documents across all collections.
    pub async fn len(&self) -> usize {
        let state = self.state.read().await;
        state.documents.values().map(BTreeMap::len).sum()
    }

    /// Returns true if no documents are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl Backend for InMemory {
    async fn allocate(&self, collection: &str) -> Result<u64> {
        let mut state = self.state.write().await;
        let last = state.serials.entry(collection.to_string()).or_insert(0);
        *last = last
            .checked_add(1)
            .ok_or_else(|| BackendError::SerialOverflow {
                collection: collection.to_string(),
            })?;
        Ok(*last)
    }

    async fn get(&self, oid: &Oid) -> Result<Option<String>> {
        let state = self.state.read().await;
        Ok(state
            .documents
            .get(oid.collection())
            .and_then(|docs| docs.get(&oid.serial()))
            .cloned())
    }

    async fn put(&self, oid: &Oid, document: String) -> Result<()> {
        let mut state = self.state.write().await;
        // Keep the counter ahead of explicitly chosen serials
        let last = state.serials.entry(oid.collection().to_string()).or_insert(0);
        if *last < oid.serial() {
            *last = oid.serial();
        }
        state
            .documents
            .entry(oid.collection().to_string())
            .or_default()
            .insert(oid.serial(), document);
        Ok(())
    }

    async fn delete(&self, oid: &Oid) -> Result<bool> {
        let mut state = self.state.write().await;
        Ok(state
            .documents
            .get_mut(oid.collection())
            .and_then(|docs| docs.remove(&oid.serial()))
            .is_some())
    }

    async fn scan(&self, collection: &str) -> Result<Vec<(Oid, String)>> {
        let state = self.state.read().await;
        Ok(state
            .documents
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(serial, doc)| (Oid::new(collection, *serial), doc.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
