use paperboard::{Instance, backend::database::Sqlite};

use crate::helpers::*;

#[tokio::test]
async fn test_sqlite_file_survives_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("paperboard.db");

    let paper = {
        let instance = Instance::open(Box::new(
            Sqlite::open(&path).await.expect("Failed to open SQLite"),
        ));
        register(&instance, "alice").await;
        let paper = instance
            .add_paper("alice", paper_form("On disk"))
            .await
            .unwrap();
        instance
            .add_post(&paper, "alice", post_form("saved", Some(2)))
            .await
            .unwrap();

        instance
            .backend()
            .as_any()
            .downcast_ref::<Sqlite>()
            .expect("Backend should be Sqlite")
            .pool()
            .close()
            .await;
        paper
    };

    let instance = Instance::open(Box::new(Sqlite::open(&path).await.unwrap()));
    let detail = instance.paper_detail(&paper, "alice").await.unwrap();
    assert_eq!(detail.paper.title, "On disk");
    assert_eq!(detail.average_score, 2.0);
    assert!(
        instance
            .login_user(&email_of("alice"), TEST_PASSWORD)
            .await
            .is_ok()
    );
}
