use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Postgres};
use std::collections::HashMap;

use crate::auth::extractors::{RoleRequired, ROLE_ADMIN};
use shared_types::AppError;

/// Aggregate register counts for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminOverviewResponse {
    /// Number of cases per case status.
    pub cases_by_status: HashMap<String, i64>,
    /// Properties whose status is anything other than DISPOSED.
    pub properties_pending_disposal: i64,
}

/// GET /api/admin/overview
#[utoipa::path(
    get,
    path = "/api/admin/overview",
    responses(
        (status = 200, description = "Register-wide counts", body = AdminOverviewResponse),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Admin role required", body = AppError),
        (status = 404, description = "Overview disabled", body = AppError)
    ),
    tag = "admin"
)]
pub async fn admin_overview(
    State(pool): State<Pool<Postgres>>,
    RoleRequired(_claims): RoleRequired<ROLE_ADMIN>,
) -> Result<Json<AdminOverviewResponse>, AppError> {
    if !crate::config::feature_flags().admin_overview {
        return Err(AppError::not_found("Admin overview is disabled"));
    }

    let cases_by_status = crate::repo::case::status_counts(&pool)
        .await?
        .into_iter()
        .collect::<HashMap<_, _>>();

    let properties_pending_disposal = crate::repo::property::count_pending_disposal(&pool).await?;

    Ok(Json(AdminOverviewResponse {
        cases_by_status,
        properties_pending_disposal,
    }))
}
