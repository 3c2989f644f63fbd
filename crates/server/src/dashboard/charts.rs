use shared_types::{ChartData, ChartKind, ChartPoint, Intern, Project, ProjectStatus, Role};

use crate::report::format::truncate_with_ellipsis;

const NEUTRAL_COLOR: &str = "#6b7280";
const PIE_MAX_POINTS: usize = 5;
const PROGRESS_TITLE_MAX_CHARS: usize = 20;

/// Count `keys` preserving first-appearance order.
fn count_in_order<K: PartialEq>(keys: impl IntoIterator<Item = K>) -> Vec<(K, u32)> {
    let mut counts: Vec<(K, u32)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

/// Projects per status, labelled and coloured.
pub fn project_status_chart(role: Role, projects: &[Project]) -> ChartData {
    let description = match role {
        Role::Admin => "État de tous les projets",
        Role::Encadreur | Role::Stagiaire => "État de mes projets",
    };

    ChartData {
        title: "Répartition des Statuts de Projets".to_string(),
        description: description.to_string(),
        kind: ChartKind::Pie,
        series_name: "Projets".to_string(),
        points: count_in_order(projects.iter().map(|p| p.status))
            .into_iter()
            .map(|(status, value)| ChartPoint {
                label: status.label().to_string(),
                value,
                color: Some(status.color().to_string()),
            })
            .collect(),
    }
}

/// The role-specific chart next to the status chart.
///
/// `interns` and `projects` must already be scoped to the requester.
pub fn role_chart(role: Role, interns: &[Intern], projects: &[Project]) -> ChartData {
    match role {
        Role::Admin => interns_by_department(interns),
        Role::Encadreur => supervised_projects_by_status(projects),
        Role::Stagiaire => own_project_progress(projects),
    }
}

fn interns_by_department(interns: &[Intern]) -> ChartData {
    let mut counts = count_in_order(interns.iter().map(Intern::department_or_default));
    // stable: ties keep first-appearance order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    ChartData {
        title: "Stagiaires par Département".to_string(),
        description: "Répartition entre les différents départements".to_string(),
        kind: ChartKind::Bar,
        series_name: "Stagiaires".to_string(),
        points: counts
            .into_iter()
            .map(|(department, value)| ChartPoint {
                label: department.to_string(),
                value,
                color: None,
            })
            .collect(),
    }
}

fn supervised_projects_by_status(projects: &[Project]) -> ChartData {
    let points: Vec<ChartPoint> = count_in_order(projects.iter().map(|p| p.status))
        .into_iter()
        .map(|(status, value)| {
            let color = match status {
                ProjectStatus::InProgress | ProjectStatus::Completed => status.color(),
                _ => NEUTRAL_COLOR,
            };
            ChartPoint {
                label: status.label().to_string(),
                value,
                color: Some(color.to_string()),
            }
        })
        .collect();

    ChartData {
        title: "Mes Projets par Statut".to_string(),
        description: "Distribution de mes projets".to_string(),
        kind: if points.len() <= PIE_MAX_POINTS {
            ChartKind::Pie
        } else {
            ChartKind::Bar
        },
        series_name: "Projets".to_string(),
        points,
    }
}

fn own_project_progress(projects: &[Project]) -> ChartData {
    ChartData {
        title: "Progression de Mes Projets".to_string(),
        description: "Avancement de chaque projet".to_string(),
        kind: ChartKind::Bar,
        series_name: "Progression (%)".to_string(),
        points: projects
            .iter()
            .map(|p| ChartPoint {
                label: truncate_with_ellipsis(&p.title, PROGRESS_TITLE_MAX_CHARS),
                value: u32::from(p.progress),
                color: None,
            })
            .collect(),
    }
}
