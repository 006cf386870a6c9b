//! Constants used throughout the Paperboard library.
//!
//! Collection names double as the prefix of every [`Oid`](crate::Oid) issued
//! for that record type, so they must never change once data exists.

/// Collection holding registered users.
pub const USERS: &str = "user";

/// Collection holding papers.
pub const PAPERS: &str = "paper";

/// Collection holding review posts.
pub const POSTS: &str = "post";

/// Lowest accepted review score.
pub const MIN_SCORE: u8 = 1;

/// Highest accepted review score.
pub const MAX_SCORE: u8 = 10;
