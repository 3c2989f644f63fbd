use shared_types::{DashboardMetrics, DashboardSummary, ReportSnapshot, Role};

use crate::report::ReportStats;

/// Salutation for the local hour of day (0–23).
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Bonjour",
        12..=17 => "Bon après-midi",
        _ => "Bonsoir",
    }
}

pub fn welcome_message(role: Role) -> &'static str {
    match role {
        Role::Admin => {
            "Bienvenue sur votre tableau de bord. Voici un aperçu de vos activités aujourd'hui."
        }
        Role::Encadreur => "Gérez vos stagiaires et suivez leurs progressions.",
        Role::Stagiaire => "Consultez vos projets et suivez vos progressions.",
    }
}

/// Banner and metric cards for the requester's scoped records.
pub fn dashboard_summary(snapshot: &ReportSnapshot, hour: u32) -> DashboardSummary {
    let role = snapshot.requester_role;
    let stats = ReportStats::compute(&snapshot.projects, &snapshot.tasks);

    DashboardSummary {
        greeting: greeting(hour).to_string(),
        user_name: snapshot.requester_name.clone(),
        role,
        role_label: role.label().to_string(),
        welcome_message: welcome_message(role).to_string(),
        metrics: DashboardMetrics {
            total_interns: if role.oversees_interns() {
                snapshot.interns.len()
            } else {
                0
            },
            active_projects: stats.active_projects,
            completed_tasks: stats.completed_tasks,
            success_rate: stats.success_rate,
        },
    }
}
