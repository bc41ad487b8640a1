use shared_types::{AppError, User};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const USER_COLUMNS: &str =
    "id, username, email, password_hash, role, officer_id, police_station, status, created_at";

/// Insert a new user. The password is already hashed by the caller.
pub async fn create(
    pool: &Pool<Postgres>,
    username: &str,
    email: &str,
    password_hash: &str,
    role: &str,
    officer_id: &str,
    police_station: &str,
) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users
            (username, email, password_hash, role, officer_id, police_station)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(officer_id)
    .bind(police_station)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Find a user by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<User>, AppError> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}
