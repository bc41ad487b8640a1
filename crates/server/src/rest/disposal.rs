use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use sqlx::{Pool, Postgres};
use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::extractors::{RoleRequired, ROLE_ADMIN};
use crate::error_convert::ValidateRequest;
use shared_types::{
    AppError, DisposalResponse, DisposalType, DisposePropertyRequest, DISPOSAL_TYPES,
};

/// POST /api/properties/{id}/dispose
///
/// The terminal administrative act: only admins may dispose property, and a
/// property can be disposed at most once. When the last property of a case
/// is disposed the case closes too.
#[utoipa::path(
    post,
    path = "/api/properties/{id}/dispose",
    request_body = DisposePropertyRequest,
    params(("id" = String, Path, description = "Property UUID")),
    responses(
        (status = 201, description = "Property disposed", body = DisposalResponse),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Admin role required", body = AppError),
        (status = 404, description = "Property not found", body = AppError),
        (status = 409, description = "Property already disposed", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "disposal"
)]
pub async fn dispose_property(
    State(pool): State<Pool<Postgres>>,
    RoleRequired(claims): RoleRequired<ROLE_ADMIN>,
    Path(id): Path<String>,
    Json(body): Json<DisposePropertyRequest>,
) -> Result<(StatusCode, Json<DisposalResponse>), AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    body.validate_request()?;

    let disposal_type = DisposalType::parse(&body.disposal_type).ok_or_else(|| {
        AppError::bad_request(format!(
            "Invalid disposal_type: {}. Valid values: {}",
            body.disposal_type,
            DISPOSAL_TYPES.join(", ")
        ))
    })?;

    let disposal_date = NaiveDate::parse_from_str(&body.disposal_date, "%Y-%m-%d").map_err(|_| {
        AppError::validation(
            "Validation failed",
            HashMap::from([(
                "disposal_date".to_string(),
                "must be a valid date in YYYY-MM-DD format".to_string(),
            )]),
        )
    })?;

    let disposal = crate::repo::property::dispose(
        &pool,
        uuid,
        disposal_type,
        body.court_order_reference.trim(),
        disposal_date,
        body.disposal_authority.as_deref(),
        body.remarks.as_deref(),
        claims.sub,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DisposalResponse::from(disposal))))
}
