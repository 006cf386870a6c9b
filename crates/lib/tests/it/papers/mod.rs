//! Paper and post management tests
//!
//! Lifecycle of papers, ownership rules, listings with averages, and the
//! cascade from papers to their posts.

mod cascade_tests;
mod listing_tests;
mod paper_lifecycle_tests;
