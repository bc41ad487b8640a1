use axum::{extract::State, http::StatusCode, Json};
use sqlx::{Pool, Postgres};

use crate::auth::extractors::AuthRequired;
use crate::error_convert::ValidateRequest;
use shared_types::{
    AppError, CreateCustodyLogRequest, CustodyAction, CustodyLogResponse, MovementPurpose,
    CUSTODY_ACTIONS, MOVEMENT_PURPOSES,
};

/// POST /api/custody-logs
///
/// Records one custody movement. Any authenticated actor may log custody;
/// the property's status is advanced per the action transition table.
#[utoipa::path(
    post,
    path = "/api/custody-logs",
    request_body = CreateCustodyLogRequest,
    responses(
        (status = 201, description = "Custody movement recorded", body = CustodyLogResponse),
        (status = 400, description = "Invalid request", body = AppError),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 404, description = "Property not found", body = AppError),
        (status = 409, description = "Property already disposed", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "custody"
)]
pub async fn create_custody_log(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Json(body): Json<CreateCustodyLogRequest>,
) -> Result<(StatusCode, Json<CustodyLogResponse>), AppError> {
    body.validate_request()?;

    if body.from_officer.trim().is_empty() {
        return Err(AppError::bad_request("from_officer must not be empty"));
    }
    if body.from_location.trim().is_empty() {
        return Err(AppError::bad_request("from_location must not be empty"));
    }
    if body.to_location.trim().is_empty() {
        return Err(AppError::bad_request("to_location must not be empty"));
    }

    let purpose = MovementPurpose::parse(&body.purpose).ok_or_else(|| {
        AppError::bad_request(format!(
            "Invalid purpose: {}. Valid values: {}",
            body.purpose,
            MOVEMENT_PURPOSES.join(", ")
        ))
    })?;

    let action = CustodyAction::parse(&body.action).ok_or_else(|| {
        AppError::bad_request(format!(
            "Invalid action: {}. Valid values: {}",
            body.action,
            CUSTODY_ACTIONS.join(", ")
        ))
    })?;

    let log = crate::repo::custody_log::record_movement(
        &pool,
        body.property_id,
        body.from_officer.trim(),
        body.to_officer.as_deref(),
        body.from_location.trim(),
        body.to_location.trim(),
        purpose,
        action,
        body.remarks.as_deref(),
        body.movement_timestamp,
        claims.sub,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(CustodyLogResponse::from(log))))
}
