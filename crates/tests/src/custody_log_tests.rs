use axum::http::StatusCode;

use crate::common::{
    create_test_case, create_test_property, dispose_property, get_authed, officer_token,
    post_json, post_json_authed, test_app, OFFICER_ID,
};

fn movement_body(property_id: &str, purpose: &str, action: &str) -> String {
    serde_json::json!({
        "property_id": property_id,
        "from_officer": "HC Kumar",
        "to_officer": "FSL Reception",
        "from_location": "Malkhana Rack 4",
        "to_location": "FSL Lab",
        "purpose": purpose,
        "action": action,
    })
    .to_string()
}

async fn seeded_property(app: &axum::Router) -> String {
    let case = create_test_case(app, "100", 2025).await;
    let prop = create_test_property(app, case["id"].as_str().unwrap(), "Mobile phone").await;
    prop["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn moved_action_puts_property_in_transit() {
    let (app, _pool, _guard) = test_app().await;
    let property_id = seeded_property(&app).await;

    let (status, resp) = post_json_authed(
        &app,
        "/api/custody-logs",
        &movement_body(&property_id, "FSL", "MOVED"),
        &officer_token(),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{:?}", resp);
    assert_eq!(resp["action"], "MOVED");
    assert_eq!(resp["handler"], OFFICER_ID);

    let (_, prop) = get_authed(&app, &format!("/api/properties/{}", property_id), &officer_token()).await;
    assert_eq!(prop["status"], "IN_TRANSIT");
}

#[tokio::test]
async fn received_action_returns_property_to_custody() {
    let (app, _pool, _guard) = test_app().await;
    let property_id = seeded_property(&app).await;

    post_json_authed(
        &app,
        "/api/custody-logs",
        &movement_body(&property_id, "FSL", "MOVED"),
        &officer_token(),
    )
    .await;

    let (status, _) = post_json_authed(
        &app,
        "/api/custody-logs",
        &movement_body(&property_id, "STORAGE", "RECEIVED"),
        &officer_token(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, prop) = get_authed(&app, &format!("/api/properties/{}", property_id), &officer_token()).await;
    assert_eq!(prop["status"], "SEIZED");
}

#[tokio::test]
async fn released_action_is_audit_only() {
    let (app, _pool, _guard) = test_app().await;
    let property_id = seeded_property(&app).await;

    let (status, _) = post_json_authed(
        &app,
        "/api/custody-logs",
        &movement_body(&property_id, "RELEASE", "RELEASED"),
        &officer_token(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Custody action RELEASED records the event without driving the status.
    let (_, prop) = get_authed(&app, &format!("/api/properties/{}", property_id), &officer_token()).await;
    assert_eq!(prop["status"], "SEIZED");
}

#[tokio::test]
async fn disposed_action_does_not_flip_status() {
    let (app, _pool, _guard) = test_app().await;
    let property_id = seeded_property(&app).await;

    // A DISPOSED custody action is an audit record; the status flip belongs
    // to the disposal operation alone.
    let (status, _) = post_json_authed(
        &app,
        "/api/custody-logs",
        &movement_body(&property_id, "DISPOSAL", "DISPOSED"),
        &officer_token(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, prop) = get_authed(&app, &format!("/api/properties/{}", property_id), &officer_token()).await;
    assert_eq!(prop["status"], "SEIZED");
}

#[tokio::test]
async fn no_custody_on_disposed_property() {
    let (app, _pool, _guard) = test_app().await;
    let property_id = seeded_property(&app).await;

    let (status, _) = dispose_property(&app, &property_id, "DESTROYED").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, resp) = post_json_authed(
        &app,
        "/api/custody-logs",
        &movement_body(&property_id, "STORAGE", "MOVED"),
        &officer_token(),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(resp["kind"], "InvalidState");

    // No audit entry was written for the rejected movement.
    let (_, logs) = get_authed(
        &app,
        &format!("/api/properties/{}/custody-logs", property_id),
        &officer_token(),
    )
    .await;
    assert_eq!(logs.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn custody_log_unknown_property_404() {
    let (app, _pool, _guard) = test_app().await;

    let (status, _) = post_json_authed(
        &app,
        "/api/custody-logs",
        &movement_body("99999999-9999-9999-9999-999999999999", "FSL", "MOVED"),
        &officer_token(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_purpose_400() {
    let (app, _pool, _guard) = test_app().await;
    let property_id = seeded_property(&app).await;

    let (status, resp) = post_json_authed(
        &app,
        "/api/custody-logs",
        &movement_body(&property_id, "LAB", "MOVED"),
        &officer_token(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["message"].as_str().unwrap().contains("Invalid purpose"));
}

#[tokio::test]
async fn invalid_action_400() {
    let (app, _pool, _guard) = test_app().await;
    let property_id = seeded_property(&app).await;

    let (status, resp) = post_json_authed(
        &app,
        "/api/custody-logs",
        &movement_body(&property_id, "FSL", "TRANSFERRED"),
        &officer_token(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["message"].as_str().unwrap().contains("Invalid action"));
}

#[tokio::test]
async fn missing_to_location_fails_validation() {
    let (app, _pool, _guard) = test_app().await;
    let property_id = seeded_property(&app).await;

    let body = serde_json::json!({
        "property_id": property_id,
        "from_officer": "HC Kumar",
        "from_location": "Rack 4",
        "to_location": "",
        "purpose": "FSL",
        "action": "MOVED",
    });
    let (status, _) =
        post_json_authed(&app, "/api/custody-logs", &body.to_string(), &officer_token()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn whitespace_from_location_rejected() {
    let (app, _pool, _guard) = test_app().await;
    let property_id = seeded_property(&app).await;

    // Whitespace-only passes the length validator; the handler must still
    // refuse to store a location that trims to nothing.
    let body = serde_json::json!({
        "property_id": property_id,
        "from_officer": "HC Kumar",
        "from_location": "   ",
        "to_location": "FSL Lab",
        "purpose": "FSL",
        "action": "MOVED",
    });
    let (status, resp) =
        post_json_authed(&app, "/api/custody-logs", &body.to_string(), &officer_token()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["message"]
        .as_str()
        .unwrap()
        .contains("from_location must not be empty"));
}

#[tokio::test]
async fn custody_log_requires_auth() {
    let (app, _pool, _guard) = test_app().await;
    let property_id = seeded_property(&app).await;

    let (status, _) = post_json(
        &app,
        "/api/custody-logs",
        &movement_body(&property_id, "FSL", "MOVED"),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn custody_chain_lists_most_recent_first() {
    let (app, _pool, _guard) = test_app().await;
    let property_id = seeded_property(&app).await;

    let first = serde_json::json!({
        "property_id": property_id,
        "from_officer": "HC Kumar",
        "from_location": "Rack 4",
        "to_location": "FSL Lab",
        "purpose": "FSL",
        "action": "MOVED",
        "movement_timestamp": "2025-05-01T10:00:00Z",
    });
    let second = serde_json::json!({
        "property_id": property_id,
        "from_officer": "FSL Reception",
        "from_location": "FSL Lab",
        "to_location": "Rack 4",
        "purpose": "STORAGE",
        "action": "RECEIVED",
        "movement_timestamp": "2025-05-03T15:30:00Z",
    });

    post_json_authed(&app, "/api/custody-logs", &first.to_string(), &officer_token()).await;
    post_json_authed(&app, "/api/custody-logs", &second.to_string(), &officer_token()).await;

    let (status, logs) = get_authed(
        &app,
        &format!("/api/properties/{}/custody-logs", property_id),
        &officer_token(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let logs = logs.as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["action"], "RECEIVED");
    assert_eq!(logs[1]["action"], "MOVED");
}
