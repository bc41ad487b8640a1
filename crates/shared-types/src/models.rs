use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ── Validation constants ────────────────────────────────────────────

/// Valid user role values matching the DB CHECK constraint.
pub const USER_ROLES: &[&str] = &["ADMIN", "OFFICER", "CLERK"];

/// Valid user account status values matching the DB CHECK constraint.
pub const USER_STATUSES: &[&str] = &["ACTIVE", "SUSPENDED"];

pub fn is_valid_user_role(s: &str) -> bool {
    USER_ROLES.contains(&s)
}

pub fn is_valid_user_status(s: &str) -> bool {
    USER_STATUSES.contains(&s)
}

// ── Roles ───────────────────────────────────────────────────────────

/// Role carried by every authenticated actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, utoipa::ToSchema)]
pub enum UserRole {
    #[default]
    Clerk,
    Officer,
    Admin,
}

impl UserRole {
    /// Parse from a JWT `role` claim or DB value. Unknown values degrade to
    /// the least-privileged Clerk.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "ADMIN" => UserRole::Admin,
            "OFFICER" => UserRole::Officer,
            _ => UserRole::Clerk,
        }
    }

    /// Uppercase string for database / JWT storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Clerk => "CLERK",
            UserRole::Officer => "OFFICER",
            UserRole::Admin => "ADMIN",
        }
    }

    /// Returns true if this role satisfies the `required` role.
    /// Admin satisfies all roles; Officer satisfies Officer and Clerk.
    pub fn satisfies(&self, required: &UserRole) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::Officer => matches!(required, UserRole::Officer | UserRole::Clerk),
            UserRole::Clerk => matches!(required, UserRole::Clerk),
        }
    }
}

// ── DB row struct ───────────────────────────────────────────────────

/// A registered user of the custody register.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub officer_id: String,
    pub police_station: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ── API types ───────────────────────────────────────────────────────

/// Request to register a new user. Admin-only.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub officer_id: Option<String>,
    #[serde(default)]
    pub police_station: Option<String>,
}

/// API response shape for a user. Never exposes the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub officer_id: String,
    pub police_station: String,
    pub status: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            email: u.email,
            role: u.role,
            officer_id: u.officer_id,
            police_station: u.police_station,
            status: u.status,
            created_at: u.created_at.to_rfc3339(),
        }
    }
}
