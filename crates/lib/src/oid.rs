//! Object identifiers issued by the storage backend.
//!
//! An [`Oid`] names one stored record: the collection it lives in plus a
//! serial number allocated by the backend. Its canonical text form is
//! `collection@serial` (for example `paper@3`). The "safe" form is the same
//! text encoded as unpadded URL-safe base64, which is what appears in URLs.

use std::{fmt, str::FromStr};

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{Deserialize, Serialize};

use crate::{Result, store::StoreError};

/// Identifier of a stored record.
///
/// Ordering is by collection, then serial, so sorting a list of OIDs from
/// one collection yields creation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid {
    collection: String,
    serial: u64,
}

impl Oid {
    /// Creates an OID from its parts.
    pub fn new(collection: impl Into<String>, serial: u64) -> Self {
        Self {
            collection: collection.into(),
            serial,
        }
    }

    /// The collection this record belongs to.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The per-collection serial number.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Encodes the OID in its URL-safe form.
    pub fn to_safe(&self) -> String {
        Base64UrlUnpadded::encode_string(self.to_string().as_bytes())
    }

    /// Decodes an OID previously produced by [`Oid::to_safe`].
    pub fn from_safe(safe: &str) -> Result<Self> {
        let invalid = |reason: String| StoreError::InvalidOid {
            value: safe.to_string(),
            reason,
        };
        let bytes = Base64UrlUnpadded::decode_vec(safe).map_err(|e| invalid(e.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|e| invalid(e.to_string()))?;
        text.parse()
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.collection, self.serial)
    }
}

impl FromStr for Oid {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| StoreError::InvalidOid {
            value: s.to_string(),
            reason: reason.to_string(),
        };
        let (collection, serial) = s
            .rsplit_once('@')
            .ok_or_else(|| invalid("missing '@' separator"))?;
        if collection.is_empty()
            || !collection
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(invalid("collection must be lowercase ascii").into());
        }
        let serial = serial
            .parse::<u64>()
            .map_err(|_| invalid("serial is not a number"))?;
        Ok(Self::new(collection, serial))
    }
}

impl Serialize for Oid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Oid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
