//!
//! Paperboard: track academic papers and the review posts written about them.
//!
//! This library holds the data model, the storage layer and the account and
//! paper services. The `paperboard` binary puts an HTTP front end on top.
//!
//! ## Core Concepts
//!
//! * **Backends (`backend::Backend`)**: A pluggable storage layer holding JSON documents keyed by [`Oid`]. Implementations are in-memory (with JSON file persistence) and SQLite.
//! * **Tables (`store::Table`)**: Typed access to one collection of [`store::Record`]s: insert, set, get, delete, and predicate scans.
//! * **Instance (`Instance`)**: The application handle that owns the backend and the clock and exposes every operation.
//! * **Users (`user`)**: Registration and email/password login with Argon2id password hashes.
//! * **Papers and posts (`papers`)**: Paper CRUD with owner checks, review posts with optional scores, and cascading deletes.

pub mod backend;
pub mod clock;
pub mod constants;
pub mod instance;
pub mod models;
pub mod oid;
pub mod papers;
pub mod store;
pub mod user;

pub use clock::{Clock, SystemClock, format_millis};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use instance::{Instance, Stats};
pub use oid::Oid;

/// Result type used throughout the Paperboard library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Paperboard library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured storage errors from the backend module
    #[error(transparent)]
    Backend(backend::BackendError),

    /// Structured errors from typed table access
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured account errors from the user module
    #[error(transparent)]
    User(user::UserError),

    /// Structured paper and post errors from the papers module
    #[error(transparent)]
    Paper(papers::PaperError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Backend(_) => "backend",
            Error::Store(_) => "store",
            Error::User(_) => "user",
            Error::Paper(_) => "papers",
            Error::Io(_) => "io",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_not_found(),
            Error::User(user_err) => user_err.is_not_found(),
            Error::Paper(paper_err) => paper_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates permission was denied.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Error::Paper(paper_err) => paper_err.is_permission_denied(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_validation_error(),
            Error::Paper(paper_err) => paper_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is database/backend-related.
    pub fn is_database_error(&self) -> bool {
        matches!(self, Error::Backend(_))
    }

    /// Check if this error indicates a data integrity issue.
    pub fn is_integrity_error(&self) -> bool {
        match self {
            Error::Backend(backend_err) => backend_err.is_integrity_error(),
            Error::Store(store_err) => store_err.is_serialization_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Backend(backend_err) => backend_err.is_io_error(),
            _ => false,
        }
    }

    /// Whether a form submission can be answered by re-rendering the form
    /// with this error's message.
    pub fn is_user_facing(&self) -> bool {
        self.is_validation_error()
            || self.is_conflict()
            || self.is_authentication_error()
            || self.is_not_found()
            || self.is_permission_denied()
    }
}
