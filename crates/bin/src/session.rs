//! Session management for web interface
//!
//! Provides in-memory session storage mapping session tokens to usernames,
//! plus the one-shot flash messages queued for each session.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

/// Session token (UUID stored in cookie)
pub type SessionToken = String;

/// Severity of a flash message; also its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// A message shown once, on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

#[derive(Debug, Default)]
struct Session {
    username: String,
    flashes: Vec<Flash>,
}

/// In-memory session store
///
/// Maps session tokens (UUIDs) to the username they authenticate. The user
/// record itself is loaded from storage on each request, so a session for a
/// user that no longer exists simply stops resolving.
/// Sessions are ephemeral and lost on server restart.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl SessionStore {
    /// Create a new empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session for a user
    ///
    /// # Returns
    /// The session token (UUID) to be stored in a cookie
    pub async fn create_session(&self, username: &str) -> SessionToken {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            token.clone(),
            Session {
                username: username.to_string(),
                flashes: Vec::new(),
            },
        );
        token
    }

    /// Get the username behind a session token
    pub async fn username_for(&self, token: &str) -> Option<String> {
        let sessions = self.sessions.read().await;
        sessions.get(token).map(|s| s.username.clone())
    }

    /// Queue a flash message for the session. Unknown tokens are ignored.
    pub async fn push_flash(&self, token: &str, level: FlashLevel, message: impl Into<String>) {
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(token) {
            session.flashes.push(Flash {
                level,
                message: message.into(),
            });
        }
    }

    /// Remove and return the session's queued flash messages
    pub async fn take_flashes(&self, token: &str) -> Vec<Flash> {
        let mut sessions = self.sessions.write().await;
        sessions
            .get_mut(token)
            .map(|s| std::mem::take(&mut s.flashes))
            .unwrap_or_default()
    }

    /// Destroy a session
    pub async fn destroy_session(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Get the number of active sessions
    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}
