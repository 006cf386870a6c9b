//! Backend tests
//!
//! Raw document operations shared by every backend, JSON file persistence
//! of the in-memory backend, and reopening SQLite files.

mod basic_operations;
mod save_load;
#[cfg(feature = "sqlite")]
mod sqlite;
