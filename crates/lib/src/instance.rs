//! The application handle.
//!
//! `Instance` owns the storage backend and the clock. Account operations live
//! in [`user`](crate::user) and paper/post operations in
//! [`papers`](crate::papers), both as `impl Instance` blocks.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    Clock, Result, SystemClock,
    backend::Backend,
    models::{Paper, Post, User},
    store::Table,
};

pub(crate) struct InstanceInternal {
    /// The storage backend
    backend: Arc<dyn Backend>,
    /// Time provider for post timestamps
    clock: Arc<dyn Clock>,
    /// Serializes registrations so the uniqueness checks hold
    registration: Mutex<()>,
}

impl std::fmt::Debug for InstanceInternal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceInternal")
            .field("backend", &"<Backend>")
            .field("clock", &self.clock)
            .finish()
    }
}

/// Record counts, as reported by `paperboard info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    pub users: usize,
    pub papers: usize,
    pub posts: usize,
}

/// Paperboard application state on top of a storage backend.
///
/// Instance is a cheap-to-clone handle around `Arc<InstanceInternal>`.
///
/// ## Example
///
/// ```
/// # use paperboard::{backend::database::InMemory, Instance, user::Registration};
/// # #[tokio::main]
/// # async fn main() -> paperboard::Result<()> {
/// let instance = Instance::open(Box::new(InMemory::new()));
///
/// instance
///     .register_user(Registration {
///         username: "alice".into(),
///         email: "alice@example.org".into(),
///         password: "hunter22".into(),
///     })
///     .await?;
/// let user = instance.login_user("alice@example.org", "hunter22").await?;
/// assert_eq!(user.username, "alice");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Instance {
    inner: Arc<InstanceInternal>,
}

impl Instance {
    /// Open an Instance on the given backend.
    pub fn open(backend: Box<dyn Backend>) -> Self {
        Self::open_impl(backend, Arc::new(SystemClock))
    }

    /// Open an Instance with a custom clock.
    ///
    /// Only available with the `testing` feature or in test builds.
    #[cfg(any(test, feature = "testing"))]
    pub fn open_with_clock(backend: Box<dyn Backend>, clock: Arc<dyn Clock>) -> Self {
        Self::open_impl(backend, clock)
    }

    fn open_impl(backend: Box<dyn Backend>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(InstanceInternal {
                backend: Arc::from(backend),
                clock,
                registration: Mutex::new(()),
            }),
        }
    }

    /// Get a reference to the backend.
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.inner.backend
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.inner.clock.as_ref()
    }

    pub(crate) fn registration_lock(&self) -> &Mutex<()> {
        &self.inner.registration
    }

    /// Typed access to stored users.
    pub fn users(&self) -> Table<User> {
        Table::new(Arc::clone(&self.inner.backend))
    }

    /// Typed access to stored papers.
    pub fn papers(&self) -> Table<Paper> {
        Table::new(Arc::clone(&self.inner.backend))
    }

    /// Typed access to stored posts.
    pub fn posts(&self) -> Table<Post> {
        Table::new(Arc::clone(&self.inner.backend))
    }

    /// Count records of every type.
    pub async fn stats(&self) -> Result<Stats> {
        Ok(Stats {
            users: self.users().count().await?,
            papers: self.papers().count().await?,
            posts: self.posts().count().await?,
        })
    }
}
