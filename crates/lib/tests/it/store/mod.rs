//! Typed store tests
//!
//! Table operations over the configured backend, and the OID text forms
//! used in URLs.

mod oid_tests;
mod table_operations;
