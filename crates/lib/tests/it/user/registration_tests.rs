use paperboard::user::{Registration, UserError};

use crate::helpers::*;

fn registration(username: &str, email: &str) -> Registration {
    Registration {
        username: username.to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

#[tokio::test]
async fn test_register_creates_exactly_one_user() {
    let instance = test_instance().await;

    let user = instance
        .register_user(registration("alice", "alice@example.org"))
        .await
        .expect("Failed to register");

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.org");
    assert_eq!(instance.users().count().await.unwrap(), 1);
    assert_eq!(instance.list_users().await.unwrap(), vec!["alice"]);
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let instance = test_instance().await;
    register(&instance, "alice").await;

    let stored = instance
        .load_user("alice")
        .await
        .unwrap()
        .expect("User should exist");
    assert_ne!(stored.password_hash, TEST_PASSWORD);
    assert!(stored.password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let instance = test_instance().await;
    register(&instance, "alice").await;

    let err = instance
        .register_user(registration("alice2", "alice@example.org"))
        .await
        .expect_err("Duplicate email should be rejected");

    assert!(err.is_conflict());
    assert!(matches!(
        err,
        paperboard::Error::User(UserError::EmailAlreadyRegistered { .. })
    ));
    assert_eq!(instance.users().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let instance = test_instance().await;
    register(&instance, "alice").await;

    let err = instance
        .register_user(registration("alice", "other@example.org"))
        .await
        .expect_err("Duplicate username should be rejected");

    assert!(matches!(
        err,
        paperboard::Error::User(UserError::UsernameAlreadyExists { .. })
    ));
    assert_eq!(instance.users().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_blank_fields_are_rejected() {
    let instance = test_instance().await;

    for (username, email, password) in [
        ("", "a@example.org", "pw"),
        ("alice", "   ", "pw"),
        ("alice", "a@example.org", ""),
    ] {
        let err = instance
            .register_user(Registration {
                username: username.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .expect_err("Blank field should be rejected");
        assert!(err.is_validation_error());
    }
    assert_eq!(instance.users().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_concurrent_registrations_with_same_email() {
    let instance = test_instance().await;

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let instance = instance.clone();
            tokio::spawn(async move {
                instance
                    .register_user(registration(&format!("user{i}"), "shared@example.org"))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for task in tasks {
        if task.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(instance.users().count().await.unwrap(), 1);
}
