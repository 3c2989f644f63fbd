//! Aggregations behind the report and dashboard figures.

use shared_types::{Intern, Project, ProjectStatus, Task, TaskPriority, TaskStatus};

/// `round(100 * part / whole)`, or 0 when there is nothing to divide by.
pub fn rate(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    NeedsImprovement,
    Average,
    Good,
    Excellent,
}

impl PerformanceTier {
    pub fn from_rate(rate: u32) -> Self {
        match rate {
            0..=49 => PerformanceTier::NeedsImprovement,
            50..=69 => PerformanceTier::Average,
            70..=84 => PerformanceTier::Good,
            _ => PerformanceTier::Excellent,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceTier::NeedsImprovement => "À améliorer",
            PerformanceTier::Average => "Moyenne",
            PerformanceTier::Good => "Bonne",
            PerformanceTier::Excellent => "Excellente",
        }
    }
}

/// Global figures over a set of projects and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStats {
    pub active_projects: usize,
    pub completed_projects: usize,
    pub total_projects: usize,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    /// Completed projects over all projects.
    pub success_rate: u32,
    /// Done tasks over all tasks.
    pub task_completion_rate: u32,
}

impl ReportStats {
    pub fn compute(projects: &[Project], tasks: &[Task]) -> Self {
        let active_projects = count_projects(projects, ProjectStatus::InProgress);
        let completed_projects = count_projects(projects, ProjectStatus::Completed);
        let completed_tasks = tasks.iter().filter(|t| t.is_done()).count();

        Self {
            active_projects,
            completed_projects,
            total_projects: projects.len(),
            completed_tasks,
            total_tasks: tasks.len(),
            success_rate: rate(completed_projects, projects.len()),
            task_completion_rate: rate(completed_tasks, tasks.len()),
        }
    }

    /// Tier of the project success rate.
    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::from_rate(self.success_rate)
    }
}

fn count_projects(projects: &[Project], status: ProjectStatus) -> usize {
    projects.iter().filter(|p| p.status == status).count()
}

/// Per-intern workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InternBreakdown {
    pub assigned_projects: usize,
    pub assigned_tasks: usize,
    pub completed_tasks: usize,
}

impl InternBreakdown {
    /// Projects are linked through the intern id, tasks through the intern's user id.
    pub fn for_intern(intern: &Intern, projects: &[Project], tasks: &[Task]) -> Self {
        let assigned: Vec<&Task> = tasks
            .iter()
            .filter(|t| t.assigned_to == Some(intern.user_id))
            .collect();

        Self {
            assigned_projects: projects
                .iter()
                .filter(|p| p.stagiaire_id == Some(intern.id))
                .count(),
            assigned_tasks: assigned.len(),
            completed_tasks: assigned.iter().filter(|t| t.is_done()).count(),
        }
    }

    /// `None` when the intern has no task at all.
    pub fn completion_rate(&self) -> Option<u32> {
        (self.assigned_tasks > 0).then(|| rate(self.completed_tasks, self.assigned_tasks))
    }
}

/// Task counts of a single project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectTaskBreakdown {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

impl ProjectTaskBreakdown {
    pub fn for_project(project: &Project, tasks: &[Task]) -> Self {
        let own: Vec<&Task> = tasks.iter().filter(|t| t.project_id == project.id).collect();
        let count = |status: TaskStatus| own.iter().filter(|t| t.status == status).count();

        Self {
            total: own.len(),
            completed: count(TaskStatus::Done),
            in_progress: count(TaskStatus::InProgress),
            pending: count(TaskStatus::Todo),
        }
    }
}

/// Task counts by status and by priority, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDistribution {
    pub by_status: Vec<(TaskStatus, usize)>,
    pub by_priority: Vec<(TaskPriority, usize)>,
}

impl TaskDistribution {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            by_status: TaskStatus::ALL
                .iter()
                .map(|&s| (s, tasks.iter().filter(|t| t.status == s).count()))
                .collect(),
            by_priority: TaskPriority::ALL
                .iter()
                .map(|&p| (p, tasks.iter().filter(|t| t.priority == p).count()))
                .collect(),
        }
    }
}
