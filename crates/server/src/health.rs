use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response for the custody register service.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub db: String,
    pub cases_on_register: i64,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Health check handler. The db probe reads the case register so a
/// healthy response also confirms the schema is migrated.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(pool): State<Pool<Postgres>>) -> Json<HealthResponse> {
    let (db_status, cases_on_register) = match sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM cases",
    )
    .fetch_one(&pool)
    .await
    {
        Ok(count) => ("connected".to_string(), count),
        Err(e) => (format!("error: {e}"), 0),
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        service: "e-malkhana".to_string(),
        db: db_status,
        cases_on_register,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
