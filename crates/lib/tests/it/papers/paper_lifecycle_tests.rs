use paperboard::{Oid, papers::PaperForm};

use crate::helpers::*;

#[tokio::test]
async fn test_add_then_detail_returns_submitted_values() {
    let (instance, id) = setup_paper().await;

    let detail = instance
        .paper_detail(&id, "alice")
        .await
        .expect("Paper should exist");

    assert_eq!(detail.id, id);
    assert_eq!(detail.paper.title, "Attention Is All You Need");
    assert_eq!(detail.paper.summary, "Summary of Attention Is All You Need");
    assert_eq!(detail.paper.url, "https://arxiv.org/abs/1706.03762");
    assert_eq!(detail.paper.publication_date, "2017-06-12");
    assert_eq!(detail.paper.owner, "alice");
    assert!(detail.posts.is_empty());
    assert_eq!(detail.average_score, 0.0);
    assert!(detail.is_owner);
    assert!(detail.is_author);
    assert!(!detail.has_reviewed);
}

#[tokio::test]
async fn test_edit_overwrites_every_field() {
    let (instance, id) = setup_paper().await;

    instance
        .edit_paper(
            &id,
            "alice",
            PaperForm {
                title: "Revised".into(),
                summary: "New summary".into(),
                url: "http://example.org/revised".into(),
                publication_date: "2020-01-31".into(),
                authors: "bob, carol".into(),
            },
        )
        .await
        .expect("Owner should be able to edit");

    let paper = instance.get_paper(&id).await.unwrap();
    assert_eq!(paper.title, "Revised");
    assert_eq!(paper.summary, "New summary");
    assert_eq!(paper.url, "http://example.org/revised");
    assert_eq!(paper.publication_date, "2020-01-31");
    assert_eq!(paper.authors, vec!["bob", "carol"]);
    assert_eq!(paper.owner, "alice");
}

#[tokio::test]
async fn test_invalid_edit_leaves_paper_unchanged() {
    let (instance, id) = setup_paper().await;
    let before = instance.get_paper(&id).await.unwrap();

    let err = instance
        .edit_paper(
            &id,
            "alice",
            PaperForm {
                publication_date: "31/01/2020".into(),
                ..paper_form("Changed")
            },
        )
        .await
        .expect_err("Bad date should be rejected");

    assert!(err.is_validation_error());
    assert_eq!(instance.get_paper(&id).await.unwrap(), before);
}

#[tokio::test]
async fn test_only_owner_may_edit_or_delete() {
    let (instance, id) = setup_paper().await;
    register(&instance, "mallory").await;

    let err = instance
        .edit_paper(&id, "mallory", paper_form("Hijacked"))
        .await
        .expect_err("Non-owner edit should fail");
    assert!(err.is_permission_denied());

    let err = instance
        .delete_paper(&id, "mallory")
        .await
        .expect_err("Non-owner delete should fail");
    assert!(err.is_permission_denied());

    assert_eq!(
        instance.get_paper(&id).await.unwrap().title,
        "Attention Is All You Need"
    );
}

#[tokio::test]
async fn test_coauthor_is_author_but_not_owner() {
    let instance = test_instance().await;
    let id = instance
        .add_paper(
            "alice",
            PaperForm {
                authors: "bob".into(),
                ..paper_form("Joint work")
            },
        )
        .await
        .unwrap();

    let detail = instance.paper_detail(&id, "bob").await.unwrap();
    assert!(detail.is_author);
    assert!(!detail.is_owner);

    let detail = instance.paper_detail(&id, "carol").await.unwrap();
    assert!(!detail.is_author);
}

#[tokio::test]
async fn test_delete_then_detail_is_not_found() {
    let (instance, id) = setup_paper().await;

    instance
        .delete_paper(&id, "alice")
        .await
        .expect("Delete should succeed");

    let err = instance
        .paper_detail(&id, "alice")
        .await
        .expect_err("Deleted paper should be gone");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_repeated_delete_is_not_found() {
    let (instance, id) = setup_paper().await;

    instance.delete_paper(&id, "alice").await.unwrap();
    let err = instance
        .delete_paper(&id, "alice")
        .await
        .expect_err("Second delete should report not found");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_unknown_and_foreign_ids_are_not_found() {
    let (instance, _) = setup_paper().await;

    for id in [Oid::new("paper", 404), Oid::new("post", 1), Oid::new("user", 1)] {
        let err = instance
            .paper_detail(&id, "alice")
            .await
            .expect_err("Should not resolve to a paper");
        assert!(err.is_not_found(), "{id}");
    }
}

#[tokio::test]
async fn test_invalid_add_creates_nothing() {
    let instance = test_instance().await;

    let err = instance
        .add_paper(
            "alice",
            PaperForm {
                url: "javascript:alert(1)".into(),
                ..paper_form("Bad link")
            },
        )
        .await
        .expect_err("Non-http URL should be rejected");
    assert!(err.is_validation_error());
    assert_eq!(instance.papers().count().await.unwrap(), 0);
}
