use serde::{Deserialize, Serialize};

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    Bug,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Done,
        TaskStatus::Bug,
    ];

    /// Label used in the task statistics listing.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "En attente",
            TaskStatus::InProgress => "En cours",
            TaskStatus::Done => "Terminées",
            TaskStatus::Bug => "Bugs",
        }
    }
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "Basse",
            TaskPriority::Medium => "Moyenne",
            TaskPriority::High => "Haute",
        }
    }
}

/// A task as returned by the task service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    #[serde(default)]
    pub title: String,
    /// Account id (not intern id) of the assignee.
    #[serde(default)]
    pub assigned_to: Option<i64>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// Upstream filter for the task service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskFilter {
    pub user_id: Option<i64>,
}

impl TaskFilter {
    pub fn assigned_to(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self.user_id {
            Some(id) => task.assigned_to == Some(id),
            None => true,
        }
    }
}
