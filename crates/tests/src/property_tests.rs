use axum::http::StatusCode;

use crate::common::{
    create_test_case, create_test_property, get_authed, officer_token, post_json_authed, test_app,
};

#[tokio::test]
async fn create_property_success() {
    let (app, _pool, _guard) = test_app().await;

    let case = create_test_case(&app, "100", 2025).await;
    let case_id = case["id"].as_str().unwrap();

    let body = serde_json::json!({
        "case_id": case_id,
        "description": "Samsung mobile phone",
        "category": "ELECTRONICS",
        "belonging_to": "ACCUSED",
        "quantity": 1.0,
        "units": "pcs",
    });
    let (status, resp) =
        post_json_authed(&app, "/api/properties", &body.to_string(), &officer_token()).await;

    assert_eq!(status, StatusCode::CREATED, "{:?}", resp);
    assert_eq!(resp["status"], "SEIZED");
    assert_eq!(resp["case_id"], case_id);
    assert_eq!(resp["belonging_to"], "ACCUSED");

    // Tag is derived from the id suffix
    let id = resp["id"].as_str().unwrap();
    let tag = resp["property_tag"].as_str().unwrap();
    let suffix = id.replace('-', "")[24..].to_uppercase();
    assert_eq!(tag, format!("PROP-{}", suffix));
}

#[tokio::test]
async fn qr_payload_encodes_property_identity() {
    let (app, _pool, _guard) = test_app().await;

    let case = create_test_case(&app, "101", 2025).await;
    let prop = create_test_property(&app, case["id"].as_str().unwrap(), "Gold chain").await;

    let qr = prop["qr_code"].as_str().expect("qr_code must be set");
    let decoded = server::qr::decode_qr_payload(qr).expect("qr payload must decode");

    assert_eq!(decoded["property_id"], prop["id"]);
    assert_eq!(decoded["case_number"], "101/2025");
    assert_eq!(decoded["property_tag"], prop["property_tag"]);
}

#[tokio::test]
async fn create_property_unknown_case_404() {
    let (app, _pool, _guard) = test_app().await;

    let body = serde_json::json!({
        "case_id": "99999999-9999-9999-9999-999999999999",
        "description": "Orphan item",
    });
    let (status, _) =
        post_json_authed(&app, "/api/properties", &body.to_string(), &officer_token()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_property_invalid_belonging_to_400() {
    let (app, _pool, _guard) = test_app().await;

    let case = create_test_case(&app, "102", 2025).await;
    let body = serde_json::json!({
        "case_id": case["id"],
        "description": "Bag of cash",
        "belonging_to": "SOMEONE",
    });
    let (status, resp) =
        post_json_authed(&app, "/api/properties", &body.to_string(), &officer_token()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["message"].as_str().unwrap().contains("belonging_to"));
}

#[tokio::test]
async fn negative_quantity_fails_validation() {
    let (app, _pool, _guard) = test_app().await;

    let case = create_test_case(&app, "103", 2025).await;
    let body = serde_json::json!({
        "case_id": case["id"],
        "description": "Ledger",
        "quantity": -2.0,
    });
    let (status, resp) =
        post_json_authed(&app, "/api/properties", &body.to_string(), &officer_token()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["quantity"].as_str().is_some());
}

#[tokio::test]
async fn list_properties_under_case() {
    let (app, _pool, _guard) = test_app().await;

    let case = create_test_case(&app, "104", 2025).await;
    let case_id = case["id"].as_str().unwrap();
    create_test_property(&app, case_id, "Knife").await;
    create_test_property(&app, case_id, "Shirt with stains").await;

    let (status, resp) = get_authed(
        &app,
        &format!("/api/cases/{}/properties", case_id),
        &officer_token(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp.as_array().unwrap().len(), 2);
    assert_eq!(resp[0]["description"], "Knife");
}

#[tokio::test]
async fn list_properties_with_search() {
    let (app, _pool, _guard) = test_app().await;

    let case = create_test_case(&app, "105", 2025).await;
    let case_id = case["id"].as_str().unwrap();
    create_test_property(&app, case_id, "Stolen laptop").await;
    create_test_property(&app, case_id, "Cash bundle").await;

    let (status, resp) = get_authed(&app, "/api/properties?q=laptop", &officer_token()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["total"], 1);
    assert_eq!(resp["properties"][0]["description"], "Stolen laptop");
}

#[tokio::test]
async fn property_can_be_added_to_disposed_case() {
    let (app, _pool, _guard) = test_app().await;

    let case = create_test_case(&app, "106", 2025).await;
    let case_id = case["id"].as_str().unwrap();
    let prop = create_test_property(&app, case_id, "Only item").await;

    let (status, _) =
        crate::common::dispose_property(&app, prop["id"].as_str().unwrap(), "DESTROYED").await;
    assert_eq!(status, StatusCode::CREATED);

    // Registering new property under the now-DISPOSED case is allowed;
    // the case status does not flip back on its own.
    let late = create_test_property(&app, case_id, "Late-found item").await;
    assert_eq!(late["status"], "SEIZED");

    let (status, resp) = get_authed(
        &app,
        &format!("/api/cases/{}", case_id),
        &officer_token(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "DISPOSED");
}
