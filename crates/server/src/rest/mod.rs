pub mod admin;
pub mod case;
pub mod custody;
pub mod disposal;
pub mod property;
pub mod user;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::db::AppState;

/// Build the REST API router for the custody register.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Cases
        .route("/api/cases", get(case::list_cases).post(case::create_case))
        .route("/api/cases/{id}", get(case::get_case))
        .route("/api/cases/{id}/status", patch(case::update_case_status))
        .route("/api/cases/{case_id}/properties", get(case::list_case_properties))
        // Properties
        .route(
            "/api/properties",
            get(property::list_properties).post(property::create_property),
        )
        .route("/api/properties/{id}", get(property::get_property))
        .route(
            "/api/properties/{property_id}/custody-logs",
            get(property::list_property_custody_logs),
        )
        .route(
            "/api/properties/{property_id}/disposal",
            get(property::get_property_disposal),
        )
        // Custody chain
        .route("/api/custody-logs", post(custody::create_custody_log))
        // Disposal
        .route("/api/properties/{id}/dispose", post(disposal::dispose_property))
        // Users
        .route("/api/users", post(user::create_user))
        // Admin
        .route("/api/admin/overview", get(admin::admin_overview))
}
