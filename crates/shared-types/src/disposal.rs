use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ── Validation constants ────────────────────────────────────────────

/// Valid disposal type values matching the DB CHECK constraint.
pub const DISPOSAL_TYPES: &[&str] = &["RETURNED", "DESTROYED", "AUCTIONED", "COURT_CUSTODY"];

pub fn is_valid_disposal_type(s: &str) -> bool {
    DISPOSAL_TYPES.contains(&s)
}

/// The terminal administrative act applied to a property.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub enum DisposalType {
    Returned,
    Destroyed,
    Auctioned,
    CourtCustody,
}

impl DisposalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisposalType::Returned => "RETURNED",
            DisposalType::Destroyed => "DESTROYED",
            DisposalType::Auctioned => "AUCTIONED",
            DisposalType::CourtCustody => "COURT_CUSTODY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "RETURNED" => Some(DisposalType::Returned),
            "DESTROYED" => Some(DisposalType::Destroyed),
            "AUCTIONED" => Some(DisposalType::Auctioned),
            "COURT_CUSTODY" => Some(DisposalType::CourtCustody),
            _ => None,
        }
    }
}

// ── DB row struct ───────────────────────────────────────────────────

/// The disposal record for a property. Append-only; at most one effective
/// disposal exists per property.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Disposal {
    pub id: Uuid,
    pub property_id: Uuid,
    pub disposal_type: String,
    pub court_order_reference: String,
    pub disposal_date: NaiveDate,
    pub disposal_authority: Option<String>,
    pub remarks: Option<String>,
    pub handled_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

// ── API types ───────────────────────────────────────────────────────

/// API response shape for a disposal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DisposalResponse {
    pub id: String,
    pub property_id: String,
    pub disposal_type: String,
    pub court_order_reference: String,
    pub disposal_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposal_authority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handled_by: Option<String>,
    pub created_at: String,
}

impl From<Disposal> for DisposalResponse {
    fn from(d: Disposal) -> Self {
        Self {
            id: d.id.to_string(),
            property_id: d.property_id.to_string(),
            disposal_type: d.disposal_type,
            court_order_reference: d.court_order_reference,
            disposal_date: d.disposal_date.to_string(),
            disposal_authority: d.disposal_authority,
            remarks: d.remarks,
            handled_by: d.handled_by.map(|u| u.to_string()),
            created_at: d.created_at.to_rfc3339(),
        }
    }
}

/// Request to dispose a property. Admin-only.
///
/// `disposal_date` arrives as a string so an unparseable date surfaces as a
/// field-level ValidationError rather than a generic deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct DisposePropertyRequest {
    pub disposal_type: String,
    #[validate(length(min = 1, message = "court_order_reference is required"))]
    pub court_order_reference: String,
    pub disposal_date: String,
    #[serde(default)]
    pub disposal_authority: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}
