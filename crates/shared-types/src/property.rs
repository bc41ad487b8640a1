use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ── Validation constants ────────────────────────────────────────────

/// Valid property status values matching the DB CHECK constraint.
/// DISPOSED is the only terminal state; RELEASED is operationally final but
/// still blocks case closure until a disposal is recorded.
pub const PROPERTY_STATUSES: &[&str] = &[
    "SEIZED", "IN_TRANSIT", "IN_LAB", "IN_COURT", "RELEASED", "DISPOSED",
];

/// Valid ownership claims matching the DB CHECK constraint.
pub const BELONGING_TO: &[&str] = &["ACCUSED", "COMPLAINANT", "UNKNOWN"];

pub fn is_valid_property_status(s: &str) -> bool {
    PROPERTY_STATUSES.contains(&s)
}

pub fn is_valid_belonging_to(s: &str) -> bool {
    BELONGING_TO.contains(&s)
}

/// Property lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub enum PropertyStatus {
    Seized,
    InTransit,
    InLab,
    InCourt,
    Released,
    Disposed,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Seized => "SEIZED",
            PropertyStatus::InTransit => "IN_TRANSIT",
            PropertyStatus::InLab => "IN_LAB",
            PropertyStatus::InCourt => "IN_COURT",
            PropertyStatus::Released => "RELEASED",
            PropertyStatus::Disposed => "DISPOSED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SEIZED" => Some(PropertyStatus::Seized),
            "IN_TRANSIT" => Some(PropertyStatus::InTransit),
            "IN_LAB" => Some(PropertyStatus::InLab),
            "IN_COURT" => Some(PropertyStatus::InCourt),
            "RELEASED" => Some(PropertyStatus::Released),
            "DISPOSED" => Some(PropertyStatus::Disposed),
            _ => None,
        }
    }

    /// Whether the status permits no further custody or disposal mutation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PropertyStatus::Disposed)
    }
}

/// Derive the human tag for a property from the suffix of its id,
/// e.g. `PROP-1A2B3C4D`.
pub fn property_tag_for(id: Uuid) -> String {
    let simple = id.simple().to_string();
    format!("PROP-{}", simple[simple.len() - 8..].to_uppercase())
}

// ── DB row struct ───────────────────────────────────────────────────

/// A single seized evidentiary item tracked within a case.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Property {
    pub id: Uuid,
    pub case_id: Uuid,
    pub property_tag: String,
    pub category: String,
    pub nature_of_property: String,
    pub belonging_to: String,
    pub quantity: f64,
    pub units: String,
    pub storage_location: String,
    pub description: String,
    pub item_image: Option<String>,
    pub qr_code: Option<String>,
    pub status: String,
    pub last_movement_at: DateTime<Utc>,
    pub seizing_officer: String,
    pub created_at: DateTime<Utc>,
}

// ── API types ───────────────────────────────────────────────────────

/// API response shape for a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PropertyResponse {
    pub id: String,
    pub case_id: String,
    pub property_tag: String,
    pub category: String,
    pub nature_of_property: String,
    pub belonging_to: String,
    pub quantity: f64,
    pub units: String,
    pub storage_location: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    pub status: String,
    pub last_movement_at: String,
    pub seizing_officer: String,
    pub created_at: String,
}

impl From<Property> for PropertyResponse {
    fn from(p: Property) -> Self {
        Self {
            id: p.id.to_string(),
            case_id: p.case_id.to_string(),
            property_tag: p.property_tag,
            category: p.category,
            nature_of_property: p.nature_of_property,
            belonging_to: p.belonging_to,
            quantity: p.quantity,
            units: p.units,
            storage_location: p.storage_location,
            description: p.description,
            item_image: p.item_image,
            qr_code: p.qr_code,
            status: p.status,
            last_movement_at: p.last_movement_at.to_rfc3339(),
            seizing_officer: p.seizing_officer,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// Paginated property list response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PropertySearchResponse {
    pub properties: Vec<PropertyResponse>,
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

/// Request to register a seized property item under a case.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreatePropertyRequest {
    pub case_id: Uuid,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub nature_of_property: Option<String>,
    #[serde(default)]
    pub belonging_to: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "quantity must be non-negative"))]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub storage_location: Option<String>,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    pub item_image: Option<String>,
    #[serde(default)]
    pub seizing_officer: Option<String>,
}
