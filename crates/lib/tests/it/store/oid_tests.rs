use paperboard::Oid;

use crate::helpers::*;

#[tokio::test]
async fn test_safe_form_of_issued_oid_resolves() {
    let (instance, paper) = setup_paper().await;

    let safe = paper.to_safe();
    assert!(
        safe.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
        "{safe} is not URL safe"
    );

    let decoded = Oid::from_safe(&safe).expect("Safe form should decode");
    assert_eq!(decoded, paper);
    assert!(instance.papers().exists(&decoded).await.unwrap());
}

#[test]
fn test_garbage_safe_forms_are_not_found() {
    for bad in ["", "%%%", "cGFwZXI", "not-base64!", "cGFwZXJAeA"] {
        let err = Oid::from_safe(bad).expect_err("Garbage should not decode");
        assert!(err.is_not_found(), "{bad}");
    }
}

#[test]
fn test_display_form() {
    assert_eq!(Oid::new("post", 3).to_string(), "post@3");
}
