use chrono::{DateTime, FixedOffset, Utc};
use shared_types::Role;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// `Rapport_{ROLE}_{YYYY-MM-DD}.pdf`, dated in UTC.
pub fn report_file_name(role: Role, generated_at: &DateTime<FixedOffset>) -> String {
    format!(
        "Rapport_{}_{}.pdf",
        role.as_str(),
        generated_at.with_timezone(&Utc).format("%Y-%m-%d")
    )
}

/// Rendered PDF plus the name it is delivered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ReportArtifact {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}
