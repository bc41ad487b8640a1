use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::auth::extractors::{AuthRequired, RoleRequired, ROLE_ADMIN};
use crate::error_convert::ValidateRequest;
use shared_types::{
    is_valid_case_status, AppError, CaseResponse, CaseSearchResponse, CreateCaseRequest,
    PropertyResponse, UpdateCaseStatusRequest, CASE_STATUSES,
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /api/cases
#[utoipa::path(
    post,
    path = "/api/cases",
    request_body = CreateCaseRequest,
    responses(
        (status = 201, description = "Case registered", body = CaseResponse),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 409, description = "Duplicate crime number/year", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "cases"
)]
pub async fn create_case(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(claims): AuthRequired,
    Json(body): Json<CreateCaseRequest>,
) -> Result<(StatusCode, Json<CaseResponse>), AppError> {
    body.validate_request()?;

    if body.crime_year < 1900 || body.crime_year > 2100 {
        return Err(AppError::bad_request("crime_year is out of range"));
    }

    let case = crate::repo::case::create(&pool, body, Some(claims.sub)).await?;
    Ok((StatusCode::CREATED, Json(CaseResponse::from(case))))
}

/// GET /api/cases/{id}
#[utoipa::path(
    get,
    path = "/api/cases/{id}",
    params(("id" = String, Path, description = "Case UUID")),
    responses(
        (status = 200, description = "Case found", body = CaseResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "cases"
)]
pub async fn get_case(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(_claims): AuthRequired,
    Path(id): Path<String>,
) -> Result<Json<CaseResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let case = crate::repo::case::find_by_id(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", id)))?;

    Ok(Json(CaseResponse::from(case)))
}

/// GET /api/cases
#[utoipa::path(
    get,
    path = "/api/cases",
    params(
        ("q" = Option<String>, Query, description = "Search over case number and police station"),
        ("offset" = Option<i64>, Query, description = "Pagination offset"),
        ("limit" = Option<i64>, Query, description = "Page size (max 100)")
    ),
    responses(
        (status = 200, description = "Matching cases", body = CaseSearchResponse)
    ),
    tag = "cases"
)]
pub async fn list_cases(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(_claims): AuthRequired,
    Query(params): Query<ListParams>,
) -> Result<Json<CaseSearchResponse>, AppError> {
    let offset = params.offset.unwrap_or(0).max(0);
    let limit = params.limit.unwrap_or(25).clamp(1, 100);

    let (cases, total) = crate::repo::case::list(&pool, params.q.as_deref(), offset, limit).await?;

    Ok(Json(CaseSearchResponse {
        cases: cases.into_iter().map(CaseResponse::from).collect(),
        total,
        offset,
        limit,
    }))
}

/// GET /api/cases/{case_id}/properties
#[utoipa::path(
    get,
    path = "/api/cases/{case_id}/properties",
    params(("case_id" = String, Path, description = "Case UUID")),
    responses(
        (status = 200, description = "Properties under the case", body = Vec<PropertyResponse>),
        (status = 404, description = "Case not found", body = AppError)
    ),
    tag = "cases"
)]
pub async fn list_case_properties(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(_claims): AuthRequired,
    Path(case_id): Path<String>,
) -> Result<Json<Vec<PropertyResponse>>, AppError> {
    let uuid =
        Uuid::parse_str(&case_id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    crate::repo::case::find_by_id(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", case_id)))?;

    let properties = crate::repo::property::list_by_case(&pool, uuid).await?;
    Ok(Json(
        properties.into_iter().map(PropertyResponse::from).collect(),
    ))
}

/// PATCH /api/cases/{id}/status — explicit administrative status override.
#[utoipa::path(
    patch,
    path = "/api/cases/{id}/status",
    request_body = UpdateCaseStatusRequest,
    params(("id" = String, Path, description = "Case UUID")),
    responses(
        (status = 200, description = "Status updated", body = CaseResponse),
        (status = 400, description = "Invalid status", body = AppError),
        (status = 403, description = "Admin role required", body = AppError),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "cases"
)]
pub async fn update_case_status(
    State(pool): State<Pool<Postgres>>,
    RoleRequired(_claims): RoleRequired<ROLE_ADMIN>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCaseStatusRequest>,
) -> Result<Json<CaseResponse>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    if !is_valid_case_status(&body.status) {
        return Err(AppError::bad_request(format!(
            "Invalid status: {}. Valid values: {}",
            body.status,
            CASE_STATUSES.join(", ")
        )));
    }

    let case = crate::repo::case::update_status(&pool, uuid, &body.status)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Case {} not found", id)))?;

    Ok(Json(CaseResponse::from(case)))
}
