use axum::extract::State;
use axum::Json;
use serde::Serialize;
use shared_types::{PageBreakPolicy, ReportSettings};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use crate::directory::DirectoryBackend;

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Remember when the process started serving. Later calls are ignored.
pub fn record_start_time() {
    STARTED.get_or_init(Instant::now);
}

fn uptime_seconds() -> u64 {
    STARTED.get().map_or(0, |t| t.elapsed().as_secs())
}

/// Where report and dashboard records come from.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DirectoryStatus {
    /// `memory` for a local dataset, `http` for the REST services.
    pub backend: String,
    /// Interns, projects and tasks loaded; absent for a remote directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub directory: DirectoryStatus,
    /// Page-break policy the report composer runs with.
    pub page_breaks: String,
}

fn policy_name(policy: PageBreakPolicy) -> &'static str {
    match policy {
        PageBreakPolicy::Heuristic => "heuristic",
        PageBreakPolicy::Measured => "measured",
    }
}

/// Liveness plus the directory and report settings in effect.
///
/// Does not contact a remote directory.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(directory): State<Arc<DirectoryBackend>>,
    State(report): State<ReportSettings>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime_seconds(),
        directory: DirectoryStatus {
            backend: directory.kind().to_string(),
            records: directory.record_count(),
        },
        page_breaks: policy_name(report.page_breaks).to_string(),
    })
}
