use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::property::PropertyStatus;

// ── Validation constants ────────────────────────────────────────────

/// Valid movement purpose values matching the DB CHECK constraint.
pub const MOVEMENT_PURPOSES: &[&str] = &[
    "COURT", "FSL", "ANALYSIS", "STORAGE", "DISPOSAL", "RELEASE", "TRANSFER",
];

/// Valid custody action values matching the DB CHECK constraint.
pub const CUSTODY_ACTIONS: &[&str] = &["MOVED", "RECEIVED", "DISPOSED", "RELEASED"];

pub fn is_valid_movement_purpose(s: &str) -> bool {
    MOVEMENT_PURPOSES.contains(&s)
}

pub fn is_valid_custody_action(s: &str) -> bool {
    CUSTODY_ACTIONS.contains(&s)
}

/// Why a property moved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub enum MovementPurpose {
    Court,
    Fsl,
    Analysis,
    Storage,
    Disposal,
    Release,
    Transfer,
}

impl MovementPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementPurpose::Court => "COURT",
            MovementPurpose::Fsl => "FSL",
            MovementPurpose::Analysis => "ANALYSIS",
            MovementPurpose::Storage => "STORAGE",
            MovementPurpose::Disposal => "DISPOSAL",
            MovementPurpose::Release => "RELEASE",
            MovementPurpose::Transfer => "TRANSFER",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "COURT" => Some(MovementPurpose::Court),
            "FSL" => Some(MovementPurpose::Fsl),
            "ANALYSIS" => Some(MovementPurpose::Analysis),
            "STORAGE" => Some(MovementPurpose::Storage),
            "DISPOSAL" => Some(MovementPurpose::Disposal),
            "RELEASE" => Some(MovementPurpose::Release),
            "TRANSFER" => Some(MovementPurpose::Transfer),
            _ => None,
        }
    }
}

/// What happened to the property in a custody event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub enum CustodyAction {
    Moved,
    Received,
    Disposed,
    Released,
}

impl CustodyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustodyAction::Moved => "MOVED",
            CustodyAction::Received => "RECEIVED",
            CustodyAction::Disposed => "DISPOSED",
            CustodyAction::Released => "RELEASED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MOVED" => Some(CustodyAction::Moved),
            "RECEIVED" => Some(CustodyAction::Received),
            "DISPOSED" => Some(CustodyAction::Disposed),
            "RELEASED" => Some(CustodyAction::Released),
            _ => None,
        }
    }

    /// The property status implied by this custody action, if any.
    ///
    /// The table is intentionally partial: DISPOSED and RELEASED custody
    /// entries are audit records only — the status flip for disposal belongs
    /// to the disposal operation, not the custody log.
    pub fn derived_status(&self) -> Option<PropertyStatus> {
        match self {
            CustodyAction::Moved => Some(PropertyStatus::InTransit),
            CustodyAction::Received => Some(PropertyStatus::Seized),
            CustodyAction::Disposed | CustodyAction::Released => None,
        }
    }
}

// ── DB row struct ───────────────────────────────────────────────────

/// One append-only movement/handling event for a property. The audit trail:
/// never updated or deleted after creation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CustodyLog {
    pub id: Uuid,
    pub property_id: Uuid,
    pub from_officer: String,
    pub to_officer: Option<String>,
    pub from_location: String,
    pub to_location: String,
    pub purpose: String,
    pub action: String,
    pub remarks: Option<String>,
    pub handler: Option<Uuid>,
    pub movement_timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

// ── API types ───────────────────────────────────────────────────────

/// API response shape for a custody log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CustodyLogResponse {
    pub id: String,
    pub property_id: String,
    pub from_officer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_officer: Option<String>,
    pub from_location: String,
    pub to_location: String,
    pub purpose: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    pub movement_timestamp: String,
    pub created_at: String,
}

impl From<CustodyLog> for CustodyLogResponse {
    fn from(l: CustodyLog) -> Self {
        Self {
            id: l.id.to_string(),
            property_id: l.property_id.to_string(),
            from_officer: l.from_officer,
            to_officer: l.to_officer,
            from_location: l.from_location,
            to_location: l.to_location,
            purpose: l.purpose,
            action: l.action,
            remarks: l.remarks,
            handler: l.handler.map(|u| u.to_string()),
            movement_timestamp: l.movement_timestamp.to_rfc3339(),
            created_at: l.created_at.to_rfc3339(),
        }
    }
}

/// Request to record a custody movement for a property.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateCustodyLogRequest {
    pub property_id: Uuid,
    #[validate(length(min = 1, message = "from_officer is required"))]
    pub from_officer: String,
    #[serde(default)]
    pub to_officer: Option<String>,
    #[validate(length(min = 1, message = "from_location is required"))]
    pub from_location: String,
    #[validate(length(min = 1, message = "to_location is required"))]
    pub to_location: String,
    pub purpose: String,
    pub action: String,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub movement_timestamp: Option<DateTime<Utc>>,
}
