use axum::http::StatusCode;

use crate::common::{
    admin_token, create_test_case, officer_token, patch_json_authed, test_app,
};

#[tokio::test]
async fn admin_can_override_status() {
    let (app, _pool, _guard) = test_app().await;

    let created = create_test_case(&app, "700", 2025).await;
    let id = created["id"].as_str().unwrap();

    let body = serde_json::json!({ "status": "IN_COURT" });
    let (status, resp) = patch_json_authed(
        &app,
        &format!("/api/cases/{}/status", id),
        &body.to_string(),
        &admin_token(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "IN_COURT");
    assert_eq!(resp["id"], id);
}

#[tokio::test]
async fn all_valid_statuses_accepted() {
    let (app, _pool, _guard) = test_app().await;

    let created = create_test_case(&app, "701", 2025).await;
    let id = created["id"].as_str().unwrap();

    for target in ["UNDER_INVESTIGATION", "IN_COURT", "DISPOSED", "PENDING"] {
        let body = serde_json::json!({ "status": target });
        let (status, resp) = patch_json_authed(
            &app,
            &format!("/api/cases/{}/status", id),
            &body.to_string(),
            &admin_token(),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "failed for status {}", target);
        assert_eq!(resp["status"], target);
    }
}

#[tokio::test]
async fn invalid_status_400() {
    let (app, _pool, _guard) = test_app().await;

    let created = create_test_case(&app, "702", 2025).await;
    let id = created["id"].as_str().unwrap();

    let body = serde_json::json!({ "status": "CLOSED" });
    let (status, resp) = patch_json_authed(
        &app,
        &format!("/api/cases/{}/status", id),
        &body.to_string(),
        &admin_token(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["message"].as_str().unwrap().contains("Invalid status"));
}

#[tokio::test]
async fn officer_cannot_override_status() {
    let (app, _pool, _guard) = test_app().await;

    let created = create_test_case(&app, "703", 2025).await;
    let id = created["id"].as_str().unwrap();

    let body = serde_json::json!({ "status": "IN_COURT" });
    let (status, resp) = patch_json_authed(
        &app,
        &format!("/api/cases/{}/status", id),
        &body.to_string(),
        &officer_token(),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(resp["kind"], "Forbidden");
}

#[tokio::test]
async fn status_override_not_found_404() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({ "status": "IN_COURT" });
    let (status, _) = patch_json_authed(
        &app,
        "/api/cases/99999999-9999-9999-9999-999999999999/status",
        &body.to_string(),
        &admin_token(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
