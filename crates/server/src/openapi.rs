use axum::Router;
use shared_types::{
    // Common
    AppError, AppErrorKind, UserRole,
    // Case types
    CaseResponse, CaseSearchResponse, CreateCaseRequest, UpdateCaseStatusRequest,
    // Property types
    CreatePropertyRequest, PropertyResponse, PropertySearchResponse,
    // Custody types
    CreateCustodyLogRequest, CustodyLogResponse,
    // Disposal types
    DisposalResponse, DisposePropertyRequest,
    // User types
    CreateUserRequest, UserResponse,
};
use sqlx::{Pool, Postgres};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health;
use crate::rest;
use crate::rest::admin::AdminOverviewResponse;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        // Cases
        rest::case::create_case,
        rest::case::get_case,
        rest::case::list_cases,
        rest::case::list_case_properties,
        rest::case::update_case_status,
        // Properties
        rest::property::create_property,
        rest::property::get_property,
        rest::property::list_properties,
        rest::property::list_property_custody_logs,
        rest::property::get_property_disposal,
        // Custody chain
        rest::custody::create_custody_log,
        // Disposal
        rest::disposal::dispose_property,
        // Users
        rest::user::create_user,
        // Admin
        rest::admin::admin_overview,
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind, UserRole,
        // Case schemas
        CaseResponse, CaseSearchResponse, CreateCaseRequest, UpdateCaseStatusRequest,
        // Property schemas
        CreatePropertyRequest, PropertyResponse, PropertySearchResponse,
        // Custody schemas
        CreateCustodyLogRequest, CustodyLogResponse,
        // Disposal schemas
        DisposalResponse, DisposePropertyRequest,
        // User schemas
        CreateUserRequest, UserResponse,
        // Admin schemas
        AdminOverviewResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "cases", description = "Case register endpoints"),
        (name = "properties", description = "Seized property register endpoints"),
        (name = "custody", description = "Custody chain endpoints"),
        (name = "disposal", description = "Property disposal endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "admin", description = "Register administration endpoints"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "e-Malkhana API",
        description = "Digital evidence and property custody register API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at `/api/*`.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };

    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .layer(axum::middleware::from_fn(
            crate::auth::middleware::auth_middleware,
        ))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
