use std::{marker::PhantomData, sync::Arc};

use crate::{
    Oid, Result,
    backend::Backend,
    store::{Record, errors::StoreError},
};

/// A record-oriented view over one collection of a backend.
///
/// `Table` provides the object-store contract the web layer relies on:
/// - `insert` saves a new record and returns the [`Oid`] the backend issued
/// - `set` overwrites an existing record
/// - `get`/`load` read one record, `exists` checks for one
/// - `delete` removes one record
/// - `search`, `find_first` and `load_all` scan the whole collection
///
/// Records are stored as JSON documents. Scans return records in OID order,
/// which is creation order.
///
/// # Type Parameters
/// - `T`: The record type, see [`Record`]
pub struct Table<T: Record> {
    backend: Arc<dyn Backend>,
    phantom: PhantomData<T>,
}

impl<T: Record> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            phantom: PhantomData,
        }
    }
}

impl<T: Record> Table<T> {
    /// Creates a table handle on the given backend.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            phantom: PhantomData,
        }
    }

    /// Name of the underlying collection.
    pub fn name(&self) -> &'static str {
        T::collection()
    }

    /// Retrieves a record by OID.
    ///
    /// # Errors
    /// * `StoreError::KeyNotFound` if no record exists with the given OID
    /// * `StoreError::WrongCollection` if the OID names another collection
    /// * `StoreError::DeserializationFailed` if the stored document is unreadable
    pub async fn get(&self, oid: &Oid) -> Result<T> {
        self.load(oid).await?.ok_or_else(|| {
            StoreError::KeyNotFound {
                store: self.name().to_string(),
                key: oid.to_string(),
            }
            .into()
        })
    }

    /// Retrieves a record by OID, returning `None` when it does not exist.
    pub async fn load(&self, oid: &Oid) -> Result<Option<T>> {
        self.check_collection(oid)?;
        match self.backend.get(oid).await? {
            Some(document) => self.decode(oid, &document).map(Some),
            None => Ok(None),
        }
    }

    /// Returns whether a record with this OID exists.
    pub async fn exists(&self, oid: &Oid) -> Result<bool> {
        if oid.collection() != self.name() {
            return Ok(false);
        }
        Ok(self.backend.get(oid).await?.is_some())
    }

    /// Inserts a new record and returns its freshly allocated OID.
    pub async fn insert(&self, row: T) -> Result<Oid> {
        let serial = self.backend.allocate(self.name()).await?;
        let oid = Oid::new(self.name(), serial);
        self.backend.put(&oid, self.encode(&oid, &row)?).await?;
        tracing::debug!(%oid, "inserted record");
        Ok(oid)
    }

    /// Replaces the record stored under `oid`.
    ///
    /// If the record does not exist yet it is created with the given OID.
    pub async fn set(&self, oid: &Oid, row: T) -> Result<()> {
        self.check_collection(oid)?;
        self.backend.put(oid, self.encode(oid, &row)?).await
    }

    /// Deletes a record.
    ///
    /// # Returns
    /// * `Ok(true)` - a record existed and was deleted
    /// * `Ok(false)` - no record existed with the given OID
    pub async fn delete(&self, oid: &Oid) -> Result<bool> {
        if oid.collection() != self.name() {
            return Ok(false);
        }
        self.backend.delete(oid).await
    }

    /// Returns every record matching `query`, in OID order.
    pub async fn search(&self, query: impl Fn(&T) -> bool) -> Result<Vec<(Oid, T)>> {
        let mut result = Vec::new();
        for (oid, document) in self.backend.scan(self.name()).await? {
            let row = self.decode(&oid, &document)?;
            if query(&row) {
                result.push((oid, row));
            }
        }
        Ok(result)
    }

    /// Returns the first record (in OID order) matching `query`.
    pub async fn find_first(&self, query: impl Fn(&T) -> bool) -> Result<Option<(Oid, T)>> {
        for (oid, document) in self.backend.scan(self.name()).await? {
            let row = self.decode(&oid, &document)?;
            if query(&row) {
                return Ok(Some((oid, row)));
            }
        }
        Ok(None)
    }

    /// Returns every record in the collection.
    pub async fn load_all(&self) -> Result<Vec<(Oid, T)>> {
        self.search(|_| true).await
    }

    /// Number of records in the collection.
    pub async fn count(&self) -> Result<usize> {
        Ok(self.backend.scan(self.name()).await?.len())
    }

    fn check_collection(&self, oid: &Oid) -> Result<()> {
        if oid.collection() != self.name() {
            return Err(StoreError::WrongCollection {
                store: self.name().to_string(),
                oid: oid.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn encode(&self, oid: &Oid, row: &T) -> Result<String> {
        serde_json::to_string(row).map_err(|e| {
            StoreError::SerializationFailed {
                store: self.name().to_string(),
                reason: format!("Failed to serialize record '{oid}': {e}"),
            }
            .into()
        })
    }

    fn decode(&self, oid: &Oid, document: &str) -> Result<T> {
        serde_json::from_str(document).map_err(|e| {
            StoreError::DeserializationFailed {
                store: self.name().to_string(),
                reason: format!("Failed to deserialize record '{oid}': {e}"),
            }
            .into()
        })
    }
}
