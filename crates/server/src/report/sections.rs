//! Section writers, in document order, and the role → sections table.

use chrono::{DateTime, FixedOffset};
use shared_types::{ReportSection, ReportSnapshot, Role};

use super::canvas::{Block, Canvas, FontWeight, ACCENT_RULE_Y};
use super::format::{format_date_fr, format_datetime_fr, truncate_with_ellipsis};
use super::stats::{InternBreakdown, ProjectTaskBreakdown, ReportStats, TaskDistribution};

const TITLE: &str = "RAPPORT DE GESTION DES STAGES";
const DESCRIPTION_MAX_CHARS: usize = 80;

// Left edges for headings, items and sub-items.
const HEADING_X: f32 = 20.0;
const ITEM_X: f32 = 25.0;
const DETAIL_X: f32 = 30.0;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 14.0;
const ITEM_SIZE: f32 = 11.0;
const DETAIL_SIZE: f32 = 10.0;
const META_SIZE: f32 = 10.0;
const DESCRIPTION_SIZE: f32 = 9.0;

const HEADING_GAP: f32 = 3.0;
const ENTRY_GAP: f32 = 3.0;
const CLOSING_GAP: f32 = 5.0;

// Heights reserved before each block under the heuristic page-break policy.
const SUMMARY_ESTIMATE: f32 = 30.0;
const LIST_HEADING_ESTIMATE: f32 = 40.0;
const INTERN_ESTIMATE: f32 = 35.0;
const PROJECT_ESTIMATE: f32 = 40.0;
const TASK_STATS_ESTIMATE: f32 = 30.0;
const CONCLUSION_ESTIMATE: f32 = 25.0;

const MANAGER_SECTIONS: &[ReportSection] = &[
    ReportSection::Header,
    ReportSection::GlobalSummary,
    ReportSection::InternDetails,
    ReportSection::ProjectDetails,
    ReportSection::TaskStatistics,
    ReportSection::Conclusion,
];

const INTERN_SECTIONS: &[ReportSection] = &[
    ReportSection::Header,
    ReportSection::GlobalSummary,
    ReportSection::ProjectDetails,
    ReportSection::TaskStatistics,
    ReportSection::Conclusion,
];

/// Sections a role receives, in document order.
pub fn sections_for(role: Role) -> &'static [ReportSection] {
    match role {
        Role::Admin | Role::Encadreur => MANAGER_SECTIONS,
        Role::Stagiaire => INTERN_SECTIONS,
    }
}

/// Read-only inputs shared by every section writer.
pub(crate) struct SectionContext<'a> {
    pub snapshot: &'a ReportSnapshot,
    pub stats: ReportStats,
    pub generated_at: &'a DateTime<FixedOffset>,
}

pub(crate) fn write_section(canvas: &mut Canvas, section: ReportSection, ctx: &SectionContext<'_>) {
    match section {
        ReportSection::Header => write_header(canvas, ctx),
        ReportSection::GlobalSummary => write_global_summary(canvas, ctx),
        ReportSection::InternDetails => write_intern_details(canvas, ctx),
        ReportSection::ProjectDetails => write_project_details(canvas, ctx),
        ReportSection::TaskStatistics => write_task_statistics(canvas, ctx),
        ReportSection::Conclusion => write_conclusion(canvas, ctx),
    }
}

fn heading(estimate: f32, title: &str) -> Block {
    let mut block = Block::new(estimate);
    block.bold(title, HEADING_X, HEADING_SIZE).gap(HEADING_GAP);
    block
}

/// Heading kept with the first entry, every entry, then a divider.
fn write_list(canvas: &mut Canvas, title: &str, entries: &[Block]) {
    canvas.write_heading(&heading(LIST_HEADING_ESTIMATE, title), entries.first());
    for entry in entries {
        canvas.write_block(entry);
    }
    canvas.write_rule();
}

fn write_header(canvas: &mut Canvas, ctx: &SectionContext<'_>) {
    canvas.accent_rule(ACCENT_RULE_Y);
    canvas.write_line(TITLE, HEADING_X, TITLE_SIZE, FontWeight::Bold);
    canvas.write_line(
        format!("Généré le: {}", format_datetime_fr(ctx.generated_at)),
        HEADING_X,
        META_SIZE,
        FontWeight::Normal,
    );
    canvas.write_line(
        format!(
            "Par: {} ({})",
            ctx.snapshot.requester_name, ctx.snapshot.requester_role
        ),
        HEADING_X,
        META_SIZE,
        FontWeight::Normal,
    );
    canvas.write_rule();
}

fn write_global_summary(canvas: &mut Canvas, ctx: &SectionContext<'_>) {
    let stats = &ctx.stats;
    let mut block = heading(SUMMARY_ESTIMATE, "RÉSUMÉ GLOBAL");

    if ctx.snapshot.requester_role.oversees_interns() {
        block.line(
            format!("Nombre de stagiaires: {}", ctx.snapshot.interns.len()),
            ITEM_X,
            ITEM_SIZE,
        );
    }
    block
        .line(format!("Projets actifs: {}", stats.active_projects), ITEM_X, ITEM_SIZE)
        .line(format!("Projets terminés: {}", stats.completed_projects), ITEM_X, ITEM_SIZE)
        .line(format!("Total projets: {}", stats.total_projects), ITEM_X, ITEM_SIZE)
        .line(format!("Tâches terminées: {}", stats.completed_tasks), ITEM_X, ITEM_SIZE)
        .line(format!("Total tâches: {}", stats.total_tasks), ITEM_X, ITEM_SIZE)
        .line(format!("Taux de réussite: {}%", stats.success_rate), ITEM_X, ITEM_SIZE);

    canvas.write_block(&block);
    canvas.write_rule();
}

fn write_intern_details(canvas: &mut Canvas, ctx: &SectionContext<'_>) {
    let snapshot = ctx.snapshot;
    let mut entries = Vec::with_capacity(snapshot.interns.len());

    for (index, intern) in snapshot.interns.iter().enumerate() {
        let breakdown = InternBreakdown::for_intern(intern, &snapshot.projects, &snapshot.tasks);

        let mut block = Block::new(INTERN_ESTIMATE);
        block
            .bold(
                format!("{}. {}", index + 1, intern.full_name()),
                ITEM_X,
                ITEM_SIZE,
            )
            .line(format!("Email: {}", intern.email), DETAIL_X, DETAIL_SIZE)
            .line(
                format!("Département: {}", intern.department_label()),
                DETAIL_X,
                DETAIL_SIZE,
            )
            .line(format!("Statut: {}", intern.status), DETAIL_X, DETAIL_SIZE)
            .line(
                format!("Projets assignés: {}", breakdown.assigned_projects),
                DETAIL_X,
                DETAIL_SIZE,
            )
            .line(
                format!("Tâches assignées: {}", breakdown.assigned_tasks),
                DETAIL_X,
                DETAIL_SIZE,
            )
            .line(
                format!("Tâches terminées: {}", breakdown.completed_tasks),
                DETAIL_X,
                DETAIL_SIZE,
            );
        if let Some(rate) = breakdown.completion_rate() {
            block.line(format!("Taux de complétion: {rate}%"), DETAIL_X, DETAIL_SIZE);
        }
        block.gap(ENTRY_GAP);
        entries.push(block);
    }

    write_list(canvas, "DÉTAILS PAR STAGIAIRE", &entries);
}

fn write_project_details(canvas: &mut Canvas, ctx: &SectionContext<'_>) {
    let snapshot = ctx.snapshot;
    let mut entries = Vec::with_capacity(snapshot.projects.len());

    for (index, project) in snapshot.projects.iter().enumerate() {
        let tasks = ProjectTaskBreakdown::for_project(project, &snapshot.tasks);

        let mut block = Block::new(PROJECT_ESTIMATE);
        block
            .bold(format!("{}. {}", index + 1, project.title), ITEM_X, ITEM_SIZE)
            .line(
                format!(
                    "Description: {}",
                    truncate_with_ellipsis(&project.description, DESCRIPTION_MAX_CHARS)
                ),
                DETAIL_X,
                DESCRIPTION_SIZE,
            )
            .line(format!("Statut: {}", project.status.label()), DETAIL_X, DETAIL_SIZE)
            .line(format!("Progression: {}%", project.progress), DETAIL_X, DETAIL_SIZE)
            .line(format!("Département: {}", project.department), DETAIL_X, DETAIL_SIZE)
            .line(
                format!("Date début: {}", format_date_fr(project.start_date)),
                DETAIL_X,
                DETAIL_SIZE,
            )
            .line(
                format!("Date fin: {}", format_date_fr(project.end_date)),
                DETAIL_X,
                DETAIL_SIZE,
            )
            .line(format!("Tâches totales: {}", tasks.total), DETAIL_X, DETAIL_SIZE)
            .line(format!("Tâches terminées: {}", tasks.completed), DETAIL_X, DETAIL_SIZE)
            .line(format!("Tâches en cours: {}", tasks.in_progress), DETAIL_X, DETAIL_SIZE)
            .line(format!("Tâches en attente: {}", tasks.pending), DETAIL_X, DETAIL_SIZE)
            .gap(ENTRY_GAP);
        entries.push(block);
    }

    write_list(canvas, "DÉTAILS PAR PROJET", &entries);
}

fn write_task_statistics(canvas: &mut Canvas, ctx: &SectionContext<'_>) {
    let distribution = TaskDistribution::from_tasks(&ctx.snapshot.tasks);
    let mut block = heading(TASK_STATS_ESTIMATE, "STATISTIQUES DES TÂCHES");

    block.bold("Par statut:", ITEM_X, ITEM_SIZE);
    for (status, count) in &distribution.by_status {
        block.line(format!("{}: {count}", status.label()), DETAIL_X, DETAIL_SIZE);
    }
    block.gap(HEADING_GAP).bold("Par priorité:", ITEM_X, ITEM_SIZE);
    for (priority, count) in &distribution.by_priority {
        block.line(format!("{}: {count}", priority.label()), DETAIL_X, DETAIL_SIZE);
    }

    canvas.write_block(&block);
    canvas.write_rule();
}

fn write_conclusion(canvas: &mut Canvas, ctx: &SectionContext<'_>) {
    let stats = &ctx.stats;
    let mut block = heading(CONCLUSION_ESTIMATE, "CONCLUSION");
    block
        .line(
            format!(
                "Taux de complétion global des tâches: {}%",
                stats.task_completion_rate
            ),
            ITEM_X,
            ITEM_SIZE,
        )
        .line(
            format!("Taux de réussite des projets: {}%", stats.success_rate),
            ITEM_X,
            ITEM_SIZE,
        )
        .line(
            format!("Évaluation de la performance: {}", stats.tier().label()),
            ITEM_X,
            ITEM_SIZE,
        )
        .gap(CLOSING_GAP);
    canvas.write_block(&block);

    let y = canvas.cursor().y();
    canvas.accent_rule(y);
}
