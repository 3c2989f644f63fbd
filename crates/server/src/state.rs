use axum::extract::FromRef;
use shared_types::ReportSettings;
use std::sync::Arc;

use crate::directory::DirectoryBackend;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract each field directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub directory: Arc<DirectoryBackend>,
    pub report: ReportSettings,
}

impl AppState {
    pub fn new(directory: impl Into<DirectoryBackend>, report: ReportSettings) -> Self {
        Self {
            directory: Arc::new(directory.into()),
            report,
        }
    }
}
