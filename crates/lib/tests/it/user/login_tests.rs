use crate::helpers::*;

#[tokio::test]
async fn test_login_with_correct_credentials() {
    let instance = test_instance().await;
    register(&instance, "alice").await;

    let user = instance
        .login_user(&email_of("alice"), TEST_PASSWORD)
        .await
        .expect("Login should succeed");
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_login_trims_email() {
    let instance = test_instance().await;
    register(&instance, "alice").await;

    let user = instance
        .login_user("  alice@example.org ", TEST_PASSWORD)
        .await
        .expect("Login should succeed");
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let instance = test_instance().await;
    register(&instance, "alice").await;

    let err = instance
        .login_user(&email_of("alice"), "wrong password")
        .await
        .expect_err("Wrong password should fail");
    assert!(err.is_authentication_error());
}

#[tokio::test]
async fn test_login_with_unknown_email() {
    let instance = test_instance().await;
    register(&instance, "alice").await;

    let err = instance
        .login_user("nobody@example.org", TEST_PASSWORD)
        .await
        .expect_err("Unknown email should fail");
    assert!(err.is_authentication_error());
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_login_does_not_match_other_users_password() {
    let instance = test_instance().await;
    register(&instance, "alice").await;
    instance
        .register_user(paperboard::user::Registration {
            username: "bob".into(),
            email: email_of("bob"),
            password: "bobs own password".into(),
        })
        .await
        .unwrap();

    assert!(
        instance
            .login_user(&email_of("bob"), TEST_PASSWORD)
            .await
            .is_err()
    );
    let bob = instance
        .login_user(&email_of("bob"), "bobs own password")
        .await
        .unwrap();
    assert_eq!(bob.username, "bob");
}

#[tokio::test]
async fn test_get_user_for_missing_username() {
    let instance = test_instance().await;
    assert!(instance.load_user("ghost").await.unwrap().is_none());
    let err = instance.get_user("ghost").await.unwrap_err();
    assert!(err.is_not_found());
}
