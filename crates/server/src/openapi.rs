use axum::Router;
use shared_types::{
    ActivityFeedItem, ActivityKind, AppError, AppErrorKind, ChartData, ChartKind, ChartPoint,
    DashboardMetrics, DashboardSummary, ReportOverview, ReportSection, Role,
    UpdateProfileRequest, UserProfile,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health::{self, DirectoryStatus, HealthResponse};
use crate::rest;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::reports::global_report,
        rest::reports::report_overview,
        rest::dashboard::summary,
        rest::dashboard::project_status_chart,
        rest::dashboard::role_chart,
        rest::dashboard::recent_activity,
        rest::profile::current_profile,
        rest::profile::update_profile,
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind,
        Role, ReportSection, ReportOverview,
        ChartKind, ChartPoint, ChartData,
        DashboardMetrics, DashboardSummary,
        ActivityKind, ActivityFeedItem,
        UserProfile, UpdateProfileRequest,
        DirectoryStatus, HealthResponse,
    )),
    tags(
        (name = "reports", description = "Paginated PDF report and its overview"),
        (name = "dashboard", description = "Role-based dashboard figures"),
        (name = "profile", description = "Settings panel profile of the signed-in account"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Stagetrack API",
        description = "Internship management reports, dashboards and profiles",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at `/api/*`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
