use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
        ProjectStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "PLANNING",
            ProjectStatus::InProgress => "IN_PROGRESS",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::OnHold => "ON_HOLD",
            ProjectStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human-readable French label.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planification",
            ProjectStatus::InProgress => "En cours",
            ProjectStatus::Completed => "Terminé",
            ProjectStatus::OnHold => "En pause",
            ProjectStatus::Cancelled => "Annulé",
        }
    }

    /// Chart color (hex) for the status distribution.
    pub fn color(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "#94a3b8",
            ProjectStatus::InProgress => "#f97316",
            ProjectStatus::Completed => "#16a34a",
            ProjectStatus::OnHold => "#eab308",
            ProjectStatus::Cancelled => "#dc2626",
        }
    }
}

/// A project as returned by the project service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Project title cannot be empty"))
    )]
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    #[cfg_attr(
        feature = "validation",
        validate(range(max = 100, message = "Progress must be between 0 and 100"))
    )]
    pub progress: u8,
    pub department: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Intern (by intern id) the project is assigned to.
    #[serde(default)]
    pub stagiaire_id: Option<i64>,
    /// Supervisor account id owning the project.
    #[serde(default)]
    pub encadreur_id: Option<i64>,
}

/// Upstream filter for the project service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectFilter {
    pub encadreur_id: Option<i64>,
}

impl ProjectFilter {
    pub fn supervised_by(user_id: i64) -> Self {
        Self {
            encadreur_id: Some(user_id),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self.encadreur_id {
            Some(id) => project.encadreur_id == Some(id),
            None => true,
        }
    }
}
