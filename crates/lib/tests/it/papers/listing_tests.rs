use paperboard::papers::{PaperFilter, PaperForm};

use crate::helpers::*;

#[tokio::test]
async fn test_average_of_three_and_five_is_four() {
    let (instance, paper) = setup_paper().await;

    instance
        .add_post(&paper, "alice", post_form("ok", Some(3)))
        .await
        .unwrap();
    instance
        .add_post(&paper, "bob", post_form("good", Some(5)))
        .await
        .unwrap();
    instance
        .add_post(&paper, "carol", post_form("no score", None))
        .await
        .unwrap();

    let detail = instance.paper_detail(&paper, "alice").await.unwrap();
    assert_eq!(detail.average_score, 4.0);
    assert_eq!(detail.posts.len(), 3);
}

#[tokio::test]
async fn test_average_rounds_to_two_places() {
    let (instance, paper) = setup_paper().await;
    for score in [1, 1, 2] {
        instance
            .add_post(&paper, "alice", post_form("r", Some(score)))
            .await
            .unwrap();
    }

    let detail = instance.paper_detail(&paper, "alice").await.unwrap();
    assert_eq!(detail.average_score, 1.33);
}

#[tokio::test]
async fn test_listing_counts_posts_per_paper() {
    let instance = test_instance().await;
    let a = instance.add_paper("alice", paper_form("A")).await.unwrap();
    let b = instance.add_paper("bob", paper_form("B")).await.unwrap();
    instance
        .add_post(&a, "bob", post_form("x", Some(8)))
        .await
        .unwrap();
    instance
        .add_post(&a, "carol", post_form("y", Some(6)))
        .await
        .unwrap();

    let listing = instance.list_papers(&PaperFilter::All).await.unwrap();
    assert_eq!(listing.len(), 2);

    assert_eq!(listing[0].id, a);
    assert_eq!(listing[0].post_count, 2);
    assert_eq!(listing[0].average_score, 7.0);

    assert_eq!(listing[1].id, b);
    assert_eq!(listing[1].post_count, 0);
    assert_eq!(listing[1].average_score, 0.0);
}

#[tokio::test]
async fn test_authored_by_filter() {
    let instance = test_instance().await;
    let own = instance.add_paper("alice", paper_form("Own")).await.unwrap();
    let coauthored = instance
        .add_paper(
            "bob",
            PaperForm {
                authors: "alice".into(),
                ..paper_form("Co-authored")
            },
        )
        .await
        .unwrap();
    instance
        .add_paper("carol", paper_form("Unrelated"))
        .await
        .unwrap();

    let mine = instance
        .list_papers(&PaperFilter::AuthoredBy("alice".into()))
        .await
        .unwrap();
    let ids: Vec<_> = mine.into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![own, coauthored]);
}
