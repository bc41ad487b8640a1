use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{create_test_case, get_no_auth, test_app};

#[tokio::test]
async fn health_reports_service_and_db() {
    let (_, pool, _guard) = test_app().await;
    // The full router, including /health outside the /api surface.
    let app = server::openapi::api_router(pool.clone());

    let (status, resp) = get_no_auth(&app, "/health").await;

    assert_eq!(status, StatusCode::OK, "{:?}", resp);
    assert_eq!(resp["status"], "ok");
    assert_eq!(resp["service"], "e-malkhana");
    assert_eq!(resp["db"], "connected");
    assert_eq!(resp["cases_on_register"], 0);
    assert!(!resp["version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn health_counts_registered_cases() {
    let (seeded_app, pool, _guard) = test_app().await;
    create_test_case(&seeded_app, "100", 2025).await;

    let app = server::openapi::api_router(pool.clone());
    let (status, resp) = get_no_auth(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["cases_on_register"], 1);
}
