use axum::{extract::State, http::StatusCode, Json};
use sqlx::{Pool, Postgres};

use crate::auth::extractors::{RoleRequired, ROLE_ADMIN};
use crate::auth::password::hash_password;
use crate::error_convert::ValidateRequest;
use shared_types::{
    is_valid_user_role, AppError, CreateUserRequest, UserResponse, USER_ROLES,
};

/// POST /api/users — register a new user account. Admin-only.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid role", body = AppError),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Admin role required", body = AppError),
        (status = 409, description = "Username or email already taken", body = AppError),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(pool): State<Pool<Postgres>>,
    RoleRequired(_claims): RoleRequired<ROLE_ADMIN>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    body.validate_request()?;

    let role = body.role.to_uppercase();
    if !is_valid_user_role(&role) {
        return Err(AppError::bad_request(format!(
            "Invalid role: {}. Valid values: {}",
            body.role,
            USER_ROLES.join(", ")
        )));
    }

    let password_hash = hash_password(&body.password)?;

    let user = crate::repo::user::create(
        &pool,
        body.username.trim(),
        body.email.trim(),
        &password_hash,
        &role,
        body.officer_id.as_deref().unwrap_or_default(),
        body.police_station.as_deref().unwrap_or_default(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
