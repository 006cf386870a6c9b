use std::sync::Arc;

use paperboard::{
    Oid,
    backend::Backend,
    store::{Record, Table},
};
use serde::{Deserialize, Serialize};

use crate::helpers::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Note {
    text: String,
    pinned: bool,
}

impl Record for Note {
    fn collection() -> &'static str {
        "note"
    }
}

fn note(text: &str, pinned: bool) -> Note {
    Note {
        text: text.to_string(),
        pinned,
    }
}

async fn notes() -> Table<Note> {
    Table::new(Arc::from(test_backend().await))
}

#[tokio::test]
async fn test_table_insert_and_get() {
    let table = notes().await;

    let id = table
        .insert(note("hello", false))
        .await
        .expect("Failed to insert record");
    assert_eq!(id.collection(), "note");

    let loaded = table.get(&id).await.expect("Failed to get record");
    assert_eq!(loaded, note("hello", false));
    assert!(table.exists(&id).await.unwrap());
}

#[tokio::test]
async fn test_table_insert_issues_distinct_increasing_oids() {
    let table = notes().await;

    let a = table.insert(note("a", false)).await.unwrap();
    let b = table.insert(note("b", false)).await.unwrap();
    let c = table.insert(note("c", false)).await.unwrap();

    assert!(a < b && b < c);
}

#[tokio::test]
async fn test_table_set_overwrites() {
    let table = notes().await;
    let id = table.insert(note("draft", false)).await.unwrap();

    table
        .set(&id, note("final", true))
        .await
        .expect("Failed to update record");

    assert_eq!(table.get(&id).await.unwrap(), note("final", true));
    assert_eq!(table.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_table_get_missing_is_key_not_found() {
    let table = notes().await;

    let err = table
        .get(&Oid::new("note", 42))
        .await
        .expect_err("Missing record should error");
    assert!(err.is_not_found());
    assert!(table.load(&Oid::new("note", 42)).await.unwrap().is_none());
    assert!(!table.exists(&Oid::new("note", 42)).await.unwrap());
}

#[tokio::test]
async fn test_table_rejects_foreign_collection() {
    let table = notes().await;
    let id = table.insert(note("x", false)).await.unwrap();
    let foreign = Oid::new("paper", id.serial());

    assert!(table.get(&foreign).await.unwrap_err().is_not_found());
    assert!(!table.exists(&foreign).await.unwrap());
    assert!(!table.delete(&foreign).await.unwrap());
    assert!(table.set(&foreign, note("y", false)).await.is_err());
    assert_eq!(table.get(&id).await.unwrap(), note("x", false));
}

#[tokio::test]
async fn test_table_delete_is_idempotent() {
    let table = notes().await;
    let id = table.insert(note("gone", false)).await.unwrap();

    assert!(table.delete(&id).await.unwrap());
    assert!(!table.delete(&id).await.unwrap());
    assert!(table.load(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_table_serials_not_reused_after_delete() {
    let table = notes().await;
    let first = table.insert(note("1", false)).await.unwrap();
    table.delete(&first).await.unwrap();

    let second = table.insert(note("2", false)).await.unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_table_search_and_find_first() {
    let table = notes().await;
    table.insert(note("a", false)).await.unwrap();
    let b = table.insert(note("b", true)).await.unwrap();
    let c = table.insert(note("c", true)).await.unwrap();

    let pinned = table.search(|n| n.pinned).await.unwrap();
    let ids: Vec<Oid> = pinned.iter().map(|(id, _)| id.clone()).collect();
    assert_eq!(ids, vec![b.clone(), c]);

    let (first_id, first) = table
        .find_first(|n| n.pinned)
        .await
        .unwrap()
        .expect("Should find a pinned note");
    assert_eq!(first_id, b);
    assert_eq!(first.text, "b");

    assert!(table.find_first(|n| n.text == "z").await.unwrap().is_none());
    assert_eq!(table.load_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_tables_share_a_backend_without_mixing() {
    let instance = test_instance().await;
    register(&instance, "alice").await;
    instance
        .add_paper("alice", paper_form("P"))
        .await
        .unwrap();

    let stats = instance.stats().await.unwrap();
    assert_eq!((stats.users, stats.papers, stats.posts), (1, 1, 0));
}

#[tokio::test]
async fn test_table_corrupt_document_is_store_integrity_error() {
    let backend: Arc<dyn Backend> = Arc::from(test_backend().await);
    let table: Table<Note> = Table::new(Arc::clone(&backend));

    let id = table.insert(note("hello", false)).await.unwrap();
    backend.put(&id, "not json".to_string()).await.unwrap();

    let err = table.get(&id).await.unwrap_err();
    assert!(matches!(err, paperboard::Error::Store(_)));
    assert!(err.is_integrity_error());
    assert_eq!(err.module(), "store");
    assert!(!err.is_user_facing());
}
