use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use shared_types::{AppError, ReportOverview, ReportSettings};

use crate::directory::DirectoryBackend;
use crate::report::{self, ComposeOptions, PDF_CONTENT_TYPE};
use crate::scope::load_report_snapshot;
use crate::session::Requester;

// ---------------------------------------------------------------------------
// GET /api/reports/global
// ---------------------------------------------------------------------------

/// Generate the paginated report for the requester and download it as PDF.
#[utoipa::path(
    get,
    path = "/api/reports/global",
    params(
        ("X-User-Role" = String, Header, description = "ADMIN, ENCADREUR or STAGIAIRE"),
        ("X-User-Id" = i64, Header, description = "Account id of the requester"),
        ("X-User-Name" = Option<String>, Header, description = "Display name for the byline")
    ),
    responses(
        (status = 200, description = "PDF report", content_type = "application/pdf", body = Vec<u8>),
        (status = 400, description = "Missing or invalid identity", body = AppError),
        (status = 422, description = "Invalid records", body = AppError),
        (status = 500, description = "Report rendering failed", body = AppError),
        (status = 502, description = "Directory unavailable", body = AppError)
    ),
    tag = "reports"
)]
#[tracing::instrument(skip_all, fields(role = %requester.0.role, user_id = requester.0.user_id))]
pub async fn global_report(
    State(directory): State<Arc<DirectoryBackend>>,
    State(settings): State<ReportSettings>,
    requester: Requester,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = load_report_snapshot(directory.as_ref(), &requester.0).await?;
    let artifact =
        report::generate_report(&snapshot, &ComposeOptions::now(settings.page_breaks)).await?;

    tracing::info!(
        file = %artifact.file_name,
        bytes = artifact.bytes.len(),
        "report generated"
    );

    let disposition = artifact.content_disposition();
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, PDF_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    ))
}

// ---------------------------------------------------------------------------
// GET /api/reports/overview
// ---------------------------------------------------------------------------

/// Figures and report contents shown before generating the PDF.
#[utoipa::path(
    get,
    path = "/api/reports/overview",
    params(
        ("X-User-Role" = String, Header, description = "ADMIN, ENCADREUR or STAGIAIRE"),
        ("X-User-Id" = i64, Header, description = "Account id of the requester")
    ),
    responses(
        (status = 200, description = "Report overview", body = ReportOverview),
        (status = 400, description = "Missing or invalid identity", body = AppError),
        (status = 502, description = "Directory unavailable", body = AppError)
    ),
    tag = "reports"
)]
#[tracing::instrument(skip_all, fields(role = %requester.0.role))]
pub async fn report_overview(
    State(directory): State<Arc<DirectoryBackend>>,
    requester: Requester,
) -> Result<Json<ReportOverview>, AppError> {
    let snapshot = load_report_snapshot(directory.as_ref(), &requester.0).await?;
    Ok(Json(report::overview(&snapshot)))
}
