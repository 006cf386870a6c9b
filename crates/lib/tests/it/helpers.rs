use std::sync::Arc;

use paperboard::{
    FixedClock, Instance, Oid,
    backend::{Backend, database::InMemory},
    models::User,
    papers::{PaperForm, PostForm},
    user::Registration,
};

// ==========================
// CORE TEST FACTORIES
// ==========================
// Every test builds its Instance through these, so the whole suite can be run
// against another backend via the TEST_BACKEND env var.

/// Creates a test backend based on TEST_BACKEND env var.
///
/// Supported values:
/// - "inmemory" or unset: InMemory backend (default)
/// - "sqlite": SQLite in-memory backend (requires `sqlite` feature)
///
/// # Example
/// ```bash
/// TEST_BACKEND=sqlite cargo test
/// ```
pub async fn test_backend() -> Box<dyn Backend> {
    match std::env::var("TEST_BACKEND").as_deref() {
        Ok("sqlite") => {
            #[cfg(feature = "sqlite")]
            {
                use paperboard::backend::database::Sqlite;
                Box::new(
                    Sqlite::in_memory()
                        .await
                        .expect("Failed to create SQLite backend"),
                )
            }
            #[cfg(not(feature = "sqlite"))]
            {
                panic!("TEST_BACKEND=sqlite requires the 'sqlite' feature to be enabled")
            }
        }
        Ok("inmemory") | Ok("") | Err(_) => Box::new(InMemory::new()),
        Ok(other) => {
            panic!("Unknown TEST_BACKEND value: {other}. Supported: inmemory, sqlite")
        }
    }
}

/// Creates an empty Instance on a [`FixedClock`], returning the clock too.
pub async fn test_instance_with_clock() -> (Instance, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::default());
    let instance = Instance::open_with_clock(test_backend().await, clock.clone());
    (instance, clock)
}

/// Creates an empty Instance.
pub async fn test_instance() -> Instance {
    test_instance_with_clock().await.0
}

/// Password used by [`register`].
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Registers `username` with the address `<username>@example.org`.
pub async fn register(instance: &Instance, username: &str) -> User {
    instance
        .register_user(Registration {
            username: username.to_string(),
            email: email_of(username),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .expect("Failed to register user")
}

pub fn email_of(username: &str) -> String {
    format!("{username}@example.org")
}

/// A valid paper form with the given title.
pub fn paper_form(title: &str) -> PaperForm {
    PaperForm {
        title: title.to_string(),
        summary: format!("Summary of {title}"),
        url: "https://arxiv.org/abs/1706.03762".to_string(),
        publication_date: "2017-06-12".to_string(),
        authors: String::new(),
    }
}

pub fn post_form(content: &str, score: Option<u8>) -> PostForm {
    PostForm {
        content: content.to_string(),
        score: score.map(|s| s.to_string()),
    }
}

/// Creates an Instance with user `alice` owning one paper.
pub async fn setup_paper() -> (Instance, Oid) {
    let instance = test_instance().await;
    register(&instance, "alice").await;
    let paper = instance
        .add_paper("alice", paper_form("Attention Is All You Need"))
        .await
        .expect("Failed to add paper");
    (instance, paper)
}
