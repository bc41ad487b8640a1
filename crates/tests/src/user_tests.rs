use axum::http::StatusCode;

use crate::common::{admin_token, officer_token, post_json_authed, test_app};

fn user_body(username: &str, email: &str, role: &str) -> String {
    serde_json::json!({
        "username": username,
        "email": email,
        "password": "locker-room-secret",
        "role": role,
        "officer_id": "OFF-9",
        "police_station": "Central",
    })
    .to_string()
}

#[tokio::test]
async fn admin_creates_user() {
    let (app, pool, _guard) = test_app().await;

    let (status, resp) = post_json_authed(
        &app,
        "/api/users",
        &user_body("new-officer", "new@station.test", "OFFICER"),
        &admin_token(),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{:?}", resp);
    assert_eq!(resp["username"], "new-officer");
    assert_eq!(resp["role"], "OFFICER");
    assert_eq!(resp["status"], "ACTIVE");
    assert!(resp.get("password_hash").is_none(), "hash must never leak");

    // Stored hash verifies against the submitted password.
    let hash: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE username = 'new-officer'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(server::auth::password::verify_password("locker-room-secret", &hash).unwrap());
}

#[tokio::test]
async fn role_is_normalized_to_uppercase() {
    let (app, _pool, _guard) = test_app().await;

    let (status, resp) = post_json_authed(
        &app,
        "/api/users",
        &user_body("new-clerk", "clerk2@station.test", "clerk"),
        &admin_token(),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["role"], "CLERK");
}

#[tokio::test]
async fn unknown_role_400() {
    let (app, _pool, _guard) = test_app().await;

    let (status, resp) = post_json_authed(
        &app,
        "/api/users",
        &user_body("sneaky", "sneaky@station.test", "SUPERUSER"),
        &admin_token(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["message"].as_str().unwrap().contains("Invalid role"));
}

#[tokio::test]
async fn short_password_422() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "username": "weak-pw",
        "email": "weak@station.test",
        "password": "short",
        "role": "CLERK",
    });
    let (status, resp) =
        post_json_authed(&app, "/api/users", &body.to_string(), &admin_token()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["password"].as_str().is_some());
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let (app, _pool, _guard) = test_app().await;

    // test-officer is seeded by the harness
    let (status, resp) = post_json_authed(
        &app,
        "/api/users",
        &user_body("test-officer", "other@station.test", "OFFICER"),
        &admin_token(),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(resp["kind"], "Conflict");
}

#[tokio::test]
async fn officer_cannot_create_users() {
    let (app, _pool, _guard) = test_app().await;

    let (status, _) = post_json_authed(
        &app,
        "/api/users",
        &user_body("wannabe", "wannabe@station.test", "ADMIN"),
        &officer_token(),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
