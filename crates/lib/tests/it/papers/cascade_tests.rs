use crate::helpers::*;

#[tokio::test]
async fn test_delete_paper_removes_all_its_posts() {
    let (instance, paper) = setup_paper().await;
    let other = instance
        .add_paper("alice", paper_form("Other"))
        .await
        .unwrap();

    for i in 0..5 {
        instance
            .add_post(&paper, "alice", post_form(&format!("post {i}"), Some(5)))
            .await
            .unwrap();
    }
    let survivor = instance
        .add_post(&other, "alice", post_form("keep me", None))
        .await
        .unwrap();

    let outcome = instance.delete_paper(&paper, "alice").await.unwrap();
    assert_eq!(outcome.posts_removed, 5);
    assert!(outcome.is_complete());

    let remaining = instance
        .posts()
        .search(|p| p.paper_id == paper)
        .await
        .unwrap();
    assert!(remaining.is_empty());

    assert_eq!(instance.posts().count().await.unwrap(), 1);
    assert!(instance.posts().exists(&survivor).await.unwrap());
}

#[tokio::test]
async fn test_delete_paper_without_posts() {
    let (instance, paper) = setup_paper().await;

    let outcome = instance.delete_paper(&paper, "alice").await.unwrap();
    assert_eq!(outcome.posts_removed, 0);
    assert_eq!(outcome.posts_failed, 0);
    assert_eq!(instance.papers().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_posts_cannot_be_added_after_delete() {
    let (instance, paper) = setup_paper().await;
    instance.delete_paper(&paper, "alice").await.unwrap();

    let err = instance
        .add_post(&paper, "alice", post_form("too late", None))
        .await
        .expect_err("Paper is gone");
    assert!(err.is_not_found());
    assert_eq!(instance.posts().count().await.unwrap(), 0);
}
