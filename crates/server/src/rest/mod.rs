pub mod dashboard;
pub mod profile;
pub mod reports;

use axum::{routing::get, Router};
use crate::state::AppState;

/// Build the REST API router (reports, dashboard and profile).
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Reports
        .route("/api/reports/global", get(reports::global_report))
        .route("/api/reports/overview", get(reports::report_overview))
        // Dashboard
        .route("/api/dashboard/summary", get(dashboard::summary))
        .route(
            "/api/dashboard/charts/project-status",
            get(dashboard::project_status_chart),
        )
        .route("/api/dashboard/charts/role", get(dashboard::role_chart))
        .route("/api/dashboard/activity", get(dashboard::recent_activity))
        // Profile
        .route(
            "/api/profile",
            get(profile::current_profile).put(profile::update_profile),
        )
}
