//! Error types for typed store operations.

use thiserror::Error;

/// Errors raised by [`Table`](super::Table) and the [`Oid`](crate::Oid) codec.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this key exists in the store
    #[error("Key not found in store '{store}': {key}")]
    KeyNotFound { store: String, key: String },

    /// An OID from another collection was used against this store
    #[error("OID {oid} does not belong to store '{store}'")]
    WrongCollection { store: String, oid: String },

    /// Text could not be decoded into an OID
    #[error("Invalid object id '{value}': {reason}")]
    InvalidOid { value: String, reason: String },

    /// Serialization failed for store data
    #[error("Serialization failed in store '{store}': {reason}")]
    SerializationFailed { store: String, reason: String },

    /// Deserialization failed for store data
    #[error("Deserialization failed in store '{store}': {reason}")]
    DeserializationFailed { store: String, reason: String },
}

impl StoreError {
    /// Check if this error indicates a resource was not found.
    ///
    /// Malformed and foreign OIDs cannot name a record in this store, so they
    /// count as not found too.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::KeyNotFound { .. }
                | StoreError::WrongCollection { .. }
                | StoreError::InvalidOid { .. }
        )
    }

    /// Check if this error is related to serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StoreError::SerializationFailed { .. } | StoreError::DeserializationFailed { .. }
        )
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
