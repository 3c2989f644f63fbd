use serde::{Deserialize, Serialize};
#[cfg(feature = "validation")]
use validator::Validate;

use crate::{Intern, Project, Role, Task};

/// Immutable bundle of records a report is generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub interns: Vec<Intern>,
    #[cfg_attr(feature = "validation", validate(nested))]
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub requester_role: Role,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Requester name cannot be empty"))
    )]
    pub requester_name: String,
}

/// One labelled block of the generated report, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ReportSection {
    Header,
    GlobalSummary,
    InternDetails,
    ProjectDetails,
    TaskStatistics,
    Conclusion,
}

impl ReportSection {
    /// Description shown in the "report contents" list.
    pub fn label(self) -> &'static str {
        match self {
            ReportSection::Header => "En-tête du rapport",
            ReportSection::GlobalSummary => "Résumé global des données",
            ReportSection::InternDetails => "Détails par stagiaire",
            ReportSection::ProjectDetails => "Détails par projet",
            ReportSection::TaskStatistics => "Statistiques des tâches",
            ReportSection::Conclusion => "Taux de réussite et conclusion",
        }
    }
}

/// Figures shown on the reports page before a PDF is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReportOverview {
    pub role: Role,
    pub success_rate: u32,
    pub total_projects: usize,
    pub total_tasks: usize,
    pub task_completion_rate: u32,
    /// Present only for roles that manage interns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intern_count: Option<usize>,
    pub sections: Vec<ReportSection>,
    pub section_labels: Vec<String>,
}
