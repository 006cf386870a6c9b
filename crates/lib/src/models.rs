//! Records persisted by Paperboard.
//!
//! These are plain data structs; all behaviour lives in the services on
//! [`Instance`](crate::Instance).

use serde::{Deserialize, Serialize};

use crate::{Oid, constants, store::Record};

/// A registered account.
///
/// `username` is the login identity carried by sessions; `email` is what the
/// login form looks users up by. Both are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    /// Argon2id hash in PHC string format
    pub password_hash: String,
}

impl Record for User {
    fn collection() -> &'static str {
        constants::USERS
    }
}

/// A tracked paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub summary: String,
    pub url: String,
    /// Publication date as `YYYY-MM-DD`
    pub publication_date: String,
    /// Co-author usernames
    pub authors: Vec<String>,
    /// Username of the user who added the paper
    pub owner: String,
}

impl Paper {
    /// Whether `username` added this paper or is listed as a co-author.
    pub fn is_author(&self, username: &str) -> bool {
        self.owner == username || self.authors.iter().any(|a| a == username)
    }

    /// Authors joined for display and form prefill.
    pub fn authors_display(&self) -> String {
        self.authors.join(", ")
    }
}

impl Record for Paper {
    fn collection() -> &'static str {
        constants::PAPERS
    }
}

/// A review post attached to a paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub content: String,
    /// Username of the author
    pub user_id: String,
    /// Raw OID of the reviewed paper
    pub paper_id: Oid,
    pub score: Option<u8>,
    /// Creation time in milliseconds since the Unix epoch
    pub timestamp: u64,
}

impl Record for Post {
    fn collection() -> &'static str {
        constants::POSTS
    }
}

/// Splits a comma separated author list, trimming blanks and duplicates.
pub fn parse_authors(input: &str) -> Vec<String> {
    let mut authors: Vec<String> = Vec::new();
    for name in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !authors.iter().any(|a| a == name) {
            authors.push(name.to_string());
        }
    }
    authors
}
