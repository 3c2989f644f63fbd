use serde::{Deserialize, Serialize};

use crate::Role;

/// How the client should draw a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Pie,
}

/// A single labelled value of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChartPoint {
    pub label: String,
    pub value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Chart-ready data plus its headings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChartData {
    pub title: String,
    pub description: String,
    pub kind: ChartKind,
    /// Legend name of the plotted series.
    pub series_name: String,
    pub points: Vec<ChartPoint>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Headline numbers of the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardMetrics {
    pub total_interns: usize,
    pub active_projects: usize,
    pub completed_tasks: usize,
    pub success_rate: u32,
}

/// Dashboard banner and metric cards for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardSummary {
    pub greeting: String,
    pub user_name: String,
    pub role: Role,
    pub role_label: String,
    pub welcome_message: String,
    pub metrics: DashboardMetrics,
}
