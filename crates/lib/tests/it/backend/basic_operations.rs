use paperboard::Oid;

use crate::helpers::*;

#[tokio::test]
async fn test_allocate_is_per_collection() {
    let backend = test_backend().await;

    assert_eq!(backend.allocate("paper").await.unwrap(), 1);
    assert_eq!(backend.allocate("paper").await.unwrap(), 2);
    assert_eq!(backend.allocate("post").await.unwrap(), 1);
}

#[tokio::test]
async fn test_put_get_delete() {
    let backend = test_backend().await;
    let oid = Oid::new("paper", backend.allocate("paper").await.unwrap());

    assert!(backend.get(&oid).await.unwrap().is_none());
    backend.put(&oid, "{}".to_string()).await.unwrap();
    assert_eq!(backend.get(&oid).await.unwrap().as_deref(), Some("{}"));

    assert!(backend.delete(&oid).await.unwrap());
    assert!(!backend.delete(&oid).await.unwrap());
    assert!(backend.get(&oid).await.unwrap().is_none());
}

#[tokio::test]
async fn test_scan_returns_collection_in_serial_order() {
    let backend = test_backend().await;
    for serial in [3, 1, 2] {
        backend
            .put(&Oid::new("paper", serial), format!("{serial}"))
            .await
            .unwrap();
    }
    backend
        .put(&Oid::new("post", 1), "other".to_string())
        .await
        .unwrap();

    let scanned = backend.scan("paper").await.unwrap();
    let serials: Vec<u64> = scanned.iter().map(|(oid, _)| oid.serial()).collect();
    assert_eq!(serials, vec![1, 2, 3]);
    assert!(backend.scan("nothing").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_explicit_put_advances_allocation() {
    let backend = test_backend().await;
    backend
        .put(&Oid::new("paper", 10), "{}".to_string())
        .await
        .unwrap();

    assert_eq!(backend.allocate("paper").await.unwrap(), 11);
}
