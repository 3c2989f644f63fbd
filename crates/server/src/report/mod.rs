//! Paginated internship report: composition, figures and delivery.

pub mod artifact;
pub mod canvas;
pub mod format;
pub mod sections;
pub mod stats;

use chrono::{DateTime, FixedOffset, Local};
use shared_types::{PageBreakPolicy, ReportOverview, ReportSnapshot};

pub use artifact::{report_file_name, ReportArtifact, PDF_CONTENT_TYPE};
pub use canvas::{Canvas, Cursor, ReportDocument};
pub use sections::sections_for;
pub use stats::{rate, PerformanceTier, ReportStats};

use sections::{write_section, SectionContext};

#[derive(Debug, Clone)]
pub struct ComposeOptions {
    pub generated_at: DateTime<FixedOffset>,
    pub page_breaks: PageBreakPolicy,
}

impl ComposeOptions {
    /// Stamp the report with the local wall-clock time.
    pub fn now(page_breaks: PageBreakPolicy) -> Self {
        Self {
            generated_at: Local::now().fixed_offset(),
            page_breaks,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposedReport {
    pub document: ReportDocument,
    pub file_name: String,
}

/// Lay out the whole report for `snapshot` in a single pass.
#[tracing::instrument(
    skip_all,
    fields(
        role = %snapshot.requester_role,
        interns = snapshot.interns.len(),
        projects = snapshot.projects.len(),
        tasks = snapshot.tasks.len(),
    )
)]
pub fn compose(snapshot: &ReportSnapshot, options: &ComposeOptions) -> ComposedReport {
    let ctx = SectionContext {
        snapshot,
        stats: ReportStats::compute(&snapshot.projects, &snapshot.tasks),
        generated_at: &options.generated_at,
    };

    let mut canvas = Canvas::new(options.page_breaks);
    for &section in sections_for(snapshot.requester_role) {
        write_section(&mut canvas, section, &ctx);
    }

    let document = canvas.finish();
    tracing::debug!(pages = document.page_count(), "report composed");

    ComposedReport {
        document,
        file_name: report_file_name(snapshot.requester_role, &options.generated_at),
    }
}

/// Figures and contents list shown before a report is generated.
pub fn overview(snapshot: &ReportSnapshot) -> ReportOverview {
    let stats = ReportStats::compute(&snapshot.projects, &snapshot.tasks);
    let role = snapshot.requester_role;
    let sections = sections_for(role).to_vec();

    ReportOverview {
        role,
        success_rate: stats.success_rate,
        total_projects: stats.total_projects,
        total_tasks: stats.total_tasks,
        task_completion_rate: stats.task_completion_rate,
        intern_count: role.oversees_interns().then_some(snapshot.interns.len()),
        section_labels: sections.iter().map(|s| s.label().to_string()).collect(),
        sections,
    }
}

/// Validate, compose and render the report to PDF.
#[cfg(feature = "server")]
pub async fn generate_report(
    snapshot: &ReportSnapshot,
    options: &ComposeOptions,
) -> Result<ReportArtifact, shared_types::AppError> {
    use validator::Validate;

    snapshot.validate()?;

    let composed = compose(snapshot, options);
    let source = crate::typst::build_report_source(&composed.document);
    let bytes = crate::typst::compile_typst(&source).await.map_err(|e| {
        tracing::error!(error = %e, file = %composed.file_name, "report rendering failed");
        e
    })?;

    Ok(ReportArtifact {
        file_name: composed.file_name,
        bytes,
    })
}
