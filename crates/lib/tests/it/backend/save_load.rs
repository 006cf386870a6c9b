use paperboard::{Instance, backend::database::InMemory};

use crate::helpers::*;

#[tokio::test]
async fn test_save_and_load_preserves_records_and_allocation() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("paperboard.json");

    let backend = InMemory::new();
    let instance = Instance::open(Box::new(backend));
    register(&instance, "alice").await;
    let paper = instance
        .add_paper("alice", paper_form("Persisted"))
        .await
        .unwrap();
    let post = instance
        .add_post(&paper, "alice", post_form("still here", Some(9)))
        .await
        .unwrap();

    let in_memory = instance
        .backend()
        .as_any()
        .downcast_ref::<InMemory>()
        .expect("Backend should be InMemory");
    in_memory
        .save_to_file(&path)
        .await
        .expect("Failed to save backend");

    let reloaded = Instance::open(Box::new(
        InMemory::load_from_file(&path)
            .await
            .expect("Failed to load backend"),
    ));

    let user = reloaded
        .login_user(&email_of("alice"), TEST_PASSWORD)
        .await
        .expect("Saved user should log in");
    assert_eq!(user.username, "alice");

    let detail = reloaded.paper_detail(&paper, "alice").await.unwrap();
    assert_eq!(detail.paper.title, "Persisted");
    assert_eq!(detail.posts.len(), 1);
    assert_eq!(detail.posts[0].0, post);
    assert_eq!(detail.average_score, 9.0);

    let next = reloaded
        .add_paper("alice", paper_form("After reload"))
        .await
        .unwrap();
    assert!(next > paper, "OID {next} reuses an earlier serial");
}

#[tokio::test]
async fn test_deleted_serials_stay_retired_across_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paperboard.json");

    let instance = Instance::open(Box::new(InMemory::new()));
    let first = instance
        .add_paper("alice", paper_form("Short lived"))
        .await
        .unwrap();
    instance.delete_paper(&first, "alice").await.unwrap();

    instance
        .backend()
        .as_any()
        .downcast_ref::<InMemory>()
        .unwrap()
        .save_to_file(&path)
        .await
        .unwrap();

    let reloaded = Instance::open(Box::new(InMemory::load_from_file(&path).await.unwrap()));
    let second = reloaded
        .add_paper("alice", paper_form("Replacement"))
        .await
        .unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_load_from_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let backend = InMemory::load_from_file(dir.path().join("nope.json"))
        .await
        .expect("Missing file should give an empty store");
    assert!(backend.is_empty().await);
}

#[tokio::test]
async fn test_load_from_corrupt_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paperboard.json");
    tokio::fs::write(&path, "{ not json").await.unwrap();

    let err = InMemory::load_from_file(&path)
        .await
        .expect_err("Corrupt file should not load");
    assert!(err.is_database_error());
}
