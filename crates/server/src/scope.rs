//! Role-based selection of the records a requester may see.

use shared_types::{
    AppError, InternFilter, ProjectFilter, ReportSnapshot, Role, SessionIdentity, TaskFilter,
};

use crate::directory::Directory;

/// Assemble the snapshot for `identity`, fetching only what the role may see.
#[tracing::instrument(skip(directory), fields(role = %identity.role, user_id = identity.user_id))]
pub async fn load_report_snapshot<D: Directory>(
    directory: &D,
    identity: &SessionIdentity,
) -> Result<ReportSnapshot, AppError> {
    let (interns, projects, tasks) = match identity.role {
        Role::Admin => {
            let (intern_filter, project_filter, task_filter) = (
                InternFilter::default(),
                ProjectFilter::default(),
                TaskFilter::default(),
            );
            tokio::try_join!(
                directory.interns(&intern_filter),
                directory.projects(&project_filter),
                directory.tasks(&task_filter),
            )?
        }
        Role::Encadreur => {
            let (intern_filter, project_filter, task_filter) = (
                InternFilter::supervised_by(identity.user_id),
                ProjectFilter::supervised_by(identity.user_id),
                TaskFilter::default(),
            );
            let (interns, projects, tasks) = tokio::try_join!(
                directory.interns(&intern_filter),
                directory.projects(&project_filter),
                directory.tasks(&task_filter),
            )?;
            let supervised: Vec<i64> = interns.iter().map(|i| i.user_id).collect();
            let tasks = tasks
                .into_iter()
                .filter(|t| t.assigned_to.is_some_and(|u| supervised.contains(&u)))
                .collect();
            (interns, projects, tasks)
        }
        Role::Stagiaire => {
            let (intern_filter, project_filter, task_filter) = (
                InternFilter::default(),
                ProjectFilter::default(),
                TaskFilter::assigned_to(identity.user_id),
            );
            let (interns, projects, tasks) = tokio::try_join!(
                directory.interns(&intern_filter),
                directory.projects(&project_filter),
                directory.tasks(&task_filter),
            )?;
            let own: Vec<_> = interns
                .into_iter()
                .filter(|i| i.user_id == identity.user_id)
                .take(1)
                .collect();
            let projects = match own.first() {
                Some(me) => projects
                    .into_iter()
                    .filter(|p| p.stagiaire_id == Some(me.id))
                    .collect(),
                None => Vec::new(),
            };
            (own, projects, tasks)
        }
    };

    tracing::debug!(
        interns = interns.len(),
        projects = projects.len(),
        tasks = tasks.len(),
        "snapshot scoped"
    );

    Ok(ReportSnapshot {
        interns,
        projects,
        tasks,
        requester_role: identity.role,
        requester_name: identity.display_name.clone(),
    })
}
