use axum::{extract::State, Json};
use chrono::{Local, Timelike, Utc};
use std::sync::Arc;

use shared_types::{ActivityFeedItem, AppError, ChartData, DashboardSummary};

use crate::dashboard::{self, activity::load_activity_feed};
use crate::directory::DirectoryBackend;
use crate::scope::load_report_snapshot;
use crate::session::Requester;

// ---------------------------------------------------------------------------
// GET /api/dashboard/summary
// ---------------------------------------------------------------------------

/// Greeting, role label and headline metrics.
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    params(
        ("X-User-Role" = String, Header, description = "ADMIN, ENCADREUR or STAGIAIRE"),
        ("X-User-Id" = i64, Header, description = "Account id of the requester"),
        ("X-User-Name" = Option<String>, Header, description = "Display name")
    ),
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 400, description = "Missing or invalid identity", body = AppError),
        (status = 502, description = "Directory unavailable", body = AppError)
    ),
    tag = "dashboard"
)]
#[tracing::instrument(skip_all, fields(role = %requester.0.role))]
pub async fn summary(
    State(directory): State<Arc<DirectoryBackend>>,
    requester: Requester,
) -> Result<Json<DashboardSummary>, AppError> {
    let snapshot = load_report_snapshot(directory.as_ref(), &requester.0).await?;
    Ok(Json(dashboard::dashboard_summary(&snapshot, Local::now().hour())))
}

// ---------------------------------------------------------------------------
// GET /api/dashboard/charts/project-status
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/dashboard/charts/project-status",
    params(
        ("X-User-Role" = String, Header, description = "ADMIN, ENCADREUR or STAGIAIRE"),
        ("X-User-Id" = i64, Header, description = "Account id of the requester")
    ),
    responses(
        (status = 200, description = "Projects per status", body = ChartData),
        (status = 400, description = "Missing or invalid identity", body = AppError),
        (status = 502, description = "Directory unavailable", body = AppError)
    ),
    tag = "dashboard"
)]
#[tracing::instrument(skip_all, fields(role = %requester.0.role))]
pub async fn project_status_chart(
    State(directory): State<Arc<DirectoryBackend>>,
    requester: Requester,
) -> Result<Json<ChartData>, AppError> {
    let snapshot = load_report_snapshot(directory.as_ref(), &requester.0).await?;
    Ok(Json(dashboard::project_status_chart(
        snapshot.requester_role,
        &snapshot.projects,
    )))
}

// ---------------------------------------------------------------------------
// GET /api/dashboard/charts/role
// ---------------------------------------------------------------------------

/// Departments for administrators, supervised projects for supervisors,
/// own progress for interns.
#[utoipa::path(
    get,
    path = "/api/dashboard/charts/role",
    params(
        ("X-User-Role" = String, Header, description = "ADMIN, ENCADREUR or STAGIAIRE"),
        ("X-User-Id" = i64, Header, description = "Account id of the requester")
    ),
    responses(
        (status = 200, description = "Role-specific chart", body = ChartData),
        (status = 400, description = "Missing or invalid identity", body = AppError),
        (status = 502, description = "Directory unavailable", body = AppError)
    ),
    tag = "dashboard"
)]
#[tracing::instrument(skip_all, fields(role = %requester.0.role))]
pub async fn role_chart(
    State(directory): State<Arc<DirectoryBackend>>,
    requester: Requester,
) -> Result<Json<ChartData>, AppError> {
    let snapshot = load_report_snapshot(directory.as_ref(), &requester.0).await?;
    Ok(Json(dashboard::role_chart(
        snapshot.requester_role,
        &snapshot.interns,
        &snapshot.projects,
    )))
}

// ---------------------------------------------------------------------------
// GET /api/dashboard/activity
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/dashboard/activity",
    params(
        ("X-User-Role" = String, Header, description = "ADMIN, ENCADREUR or STAGIAIRE"),
        ("X-User-Id" = i64, Header, description = "Account id of the requester")
    ),
    responses(
        (status = 200, description = "Latest activities", body = Vec<ActivityFeedItem>),
        (status = 400, description = "Missing or invalid identity", body = AppError),
        (status = 502, description = "Directory unavailable", body = AppError)
    ),
    tag = "dashboard"
)]
#[tracing::instrument(skip_all, fields(role = %requester.0.role))]
pub async fn recent_activity(
    State(directory): State<Arc<DirectoryBackend>>,
    requester: Requester,
) -> Result<Json<Vec<ActivityFeedItem>>, AppError> {
    let feed = load_activity_feed(directory.as_ref(), Utc::now()).await?;
    Ok(Json(feed))
}
