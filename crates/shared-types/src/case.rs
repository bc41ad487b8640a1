use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ── Validation constants ────────────────────────────────────────────

/// Valid case status values matching the DB CHECK constraint.
pub const CASE_STATUSES: &[&str] = &["PENDING", "UNDER_INVESTIGATION", "IN_COURT", "DISPOSED"];

/// Check whether a status string is a valid case status.
pub fn is_valid_case_status(s: &str) -> bool {
    CASE_STATUSES.contains(&s)
}

/// Case lifecycle status. DISPOSED is reached automatically only when every
/// property under the case has been disposed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub enum CaseStatus {
    Pending,
    UnderInvestigation,
    InCourt,
    Disposed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "PENDING",
            CaseStatus::UnderInvestigation => "UNDER_INVESTIGATION",
            CaseStatus::InCourt => "IN_COURT",
            CaseStatus::Disposed => "DISPOSED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(CaseStatus::Pending),
            "UNDER_INVESTIGATION" => Some(CaseStatus::UnderInvestigation),
            "IN_COURT" => Some(CaseStatus::InCourt),
            "DISPOSED" => Some(CaseStatus::Disposed),
            _ => None,
        }
    }
}

/// Build the display key for a case: `"{crime_number}/{crime_year}"`.
pub fn case_number_for(crime_number: &str, crime_year: i32) -> String {
    format!("{}/{}", crime_number, crime_year)
}

// ── DB row struct ───────────────────────────────────────────────────

/// An investigative case under which seized property is registered.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Case {
    pub id: Uuid,
    pub crime_number: String,
    pub crime_year: i32,
    pub case_number: String,
    pub police_station: String,
    pub investigating_officer_name: String,
    pub investigating_officer_id: String,
    pub fir_date: Option<NaiveDate>,
    pub seizure_date: Option<NaiveDate>,
    pub act_and_law: String,
    pub section: String,
    pub status: String,
    pub status_updated_at: DateTime<Utc>,
    pub reporting_officer: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

// ── API types ───────────────────────────────────────────────────────

/// API response shape for a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CaseResponse {
    pub id: String,
    pub crime_number: String,
    pub crime_year: i32,
    pub case_number: String,
    pub police_station: String,
    pub investigating_officer_name: String,
    pub investigating_officer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fir_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seizure_date: Option<String>,
    pub act_and_law: String,
    pub section: String,
    pub status: String,
    pub status_updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_officer: Option<String>,
    pub created_at: String,
}

impl From<Case> for CaseResponse {
    fn from(c: Case) -> Self {
        Self {
            id: c.id.to_string(),
            crime_number: c.crime_number,
            crime_year: c.crime_year,
            case_number: c.case_number,
            police_station: c.police_station,
            investigating_officer_name: c.investigating_officer_name,
            investigating_officer_id: c.investigating_officer_id,
            fir_date: c.fir_date.map(|d| d.to_string()),
            seizure_date: c.seizure_date.map(|d| d.to_string()),
            act_and_law: c.act_and_law,
            section: c.section,
            status: c.status,
            status_updated_at: c.status_updated_at.to_rfc3339(),
            reporting_officer: c.reporting_officer.map(|u| u.to_string()),
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// Paginated case list response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CaseSearchResponse {
    pub cases: Vec<CaseResponse>,
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

/// Request to register a new case.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateCaseRequest {
    #[validate(length(min = 1, message = "crime_number is required"))]
    pub crime_number: String,
    pub crime_year: i32,
    #[validate(length(min = 1, message = "police_station is required"))]
    pub police_station: String,
    #[validate(length(min = 1, message = "investigating_officer_name is required"))]
    pub investigating_officer_name: String,
    #[serde(default)]
    pub investigating_officer_id: Option<String>,
    #[serde(default)]
    pub fir_date: Option<NaiveDate>,
    #[serde(default)]
    pub seizure_date: Option<NaiveDate>,
    #[serde(default)]
    pub act_and_law: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
}

/// Explicit administrative case status override.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateCaseStatusRequest {
    pub status: String,
}
