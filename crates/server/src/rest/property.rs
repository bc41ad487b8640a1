use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::auth::extractors::AuthRequired;
use crate::error_convert::ValidateRequest;
use crate::rest::case::ListParams;
use shared_types::{
    is_valid_belonging_to, AppError, CreatePropertyRequest, CustodyLogResponse, DisposalResponse,
    PropertyResponse, PropertySearchResponse, BELONGING_TO,
};

/// POST /api/properties
#[utoipa::path(
    post,
    path = "/api/properties",
    request_body = CreatePropertyRequest,
    responses(
        (status = 201, description = "Property registered", body = PropertyResponse),
        (status = 400, description = "Invalid request", body = AppError),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 404, description = "Case not found", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "properties"
)]
pub async fn create_property(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(_claims): AuthRequired,
    Json(body): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<PropertyResponse>), AppError> {
    body.validate_request()?;

    if body.description.trim().is_empty() {
        return Err(AppError::bad_request("description must not be empty"));
    }

    if let Some(ref b) = body.belonging_to {
        if !is_valid_belonging_to(b) {
            return Err(AppError::bad_request(format!(
                "Invalid belonging_to: {}. Valid values: {}",
                b,
                BELONGING_TO.join(", ")
            )));
        }
    }

    let case = crate::repo::case::find_by_id(&pool, body.case_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", body.case_id)))?;

    let qr_tagging = crate::config::feature_flags().qr_tagging;
    let property = crate::repo::property::create(&pool, body, &case.case_number, qr_tagging).await?;

    Ok((StatusCode::CREATED, Json(PropertyResponse::from(property))))
}

/// GET /api/properties/{id}
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    params(("id" = String, Path, description = "Property UUID")),
    responses(
        (status = 200, description = "Property found", body = PropertyResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "properties"
)]
pub async fn get_property(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(_claims): AuthRequired,
    Path(id): Path<String>,
) -> Result<Json<PropertyResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let property = crate::repo::property::find_by_id(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Property {} not found", id)))?;

    Ok(Json(PropertyResponse::from(property)))
}

/// GET /api/properties
#[utoipa::path(
    get,
    path = "/api/properties",
    params(
        ("q" = Option<String>, Query, description = "Search over description and property tag"),
        ("offset" = Option<i64>, Query, description = "Pagination offset"),
        ("limit" = Option<i64>, Query, description = "Page size (max 100)")
    ),
    responses(
        (status = 200, description = "Matching properties", body = PropertySearchResponse)
    ),
    tag = "properties"
)]
pub async fn list_properties(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(_claims): AuthRequired,
    Query(params): Query<ListParams>,
) -> Result<Json<PropertySearchResponse>, AppError> {
    let offset = params.offset.unwrap_or(0).max(0);
    let limit = params.limit.unwrap_or(25).clamp(1, 100);

    let (properties, total) =
        crate::repo::property::list(&pool, params.q.as_deref(), offset, limit).await?;

    Ok(Json(PropertySearchResponse {
        properties: properties.into_iter().map(PropertyResponse::from).collect(),
        total,
        offset,
        limit,
    }))
}

/// GET /api/properties/{property_id}/custody-logs
#[utoipa::path(
    get,
    path = "/api/properties/{property_id}/custody-logs",
    params(("property_id" = String, Path, description = "Property UUID")),
    responses(
        (status = 200, description = "Custody chain, most recent first", body = Vec<CustodyLogResponse>),
        (status = 404, description = "Property not found", body = AppError)
    ),
    tag = "custody"
)]
pub async fn list_property_custody_logs(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(_claims): AuthRequired,
    Path(property_id): Path<String>,
) -> Result<Json<Vec<CustodyLogResponse>>, AppError> {
    let uuid =
        Uuid::parse_str(&property_id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    crate::repo::property::find_by_id(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Property {} not found", property_id)))?;

    let logs = crate::repo::custody_log::list_by_property(&pool, uuid).await?;
    Ok(Json(logs.into_iter().map(CustodyLogResponse::from).collect()))
}

/// GET /api/properties/{property_id}/disposal
#[utoipa::path(
    get,
    path = "/api/properties/{property_id}/disposal",
    params(("property_id" = String, Path, description = "Property UUID")),
    responses(
        (status = 200, description = "Disposal record", body = DisposalResponse),
        (status = 404, description = "No disposal recorded", body = AppError)
    ),
    tag = "disposal"
)]
pub async fn get_property_disposal(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(_claims): AuthRequired,
    Path(property_id): Path<String>,
) -> Result<Json<DisposalResponse>, AppError> {
    let uuid =
        Uuid::parse_str(&property_id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let disposal = crate::repo::disposal::find_by_property(&pool, uuid)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("No disposal recorded for property {}", property_id))
        })?;

    Ok(Json(DisposalResponse::from(disposal)))
}
