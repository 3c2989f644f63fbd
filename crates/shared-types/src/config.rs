use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
}

/// How the report composer decides to start a new page before a block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageBreakPolicy {
    /// Fixed per-block estimates; pagination identical to the legacy report.
    /// Long blocks can run past the bottom margin.
    Heuristic,
    /// Exact block height computed from the lines about to be written.
    #[default]
    Measured,
}

/// `[report]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReportSettings {
    #[serde(default)]
    pub page_breaks: PageBreakPolicy,
}

/// `[directory]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectorySettings {
    /// JSON dataset with interns, projects, tasks, activities and users.
    #[serde(default = "default_directory_path")]
    pub path: String,
    /// Root of the REST services; takes precedence over `path` when set.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_directory_path() -> String {
    "data/directory.json".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            path: default_directory_path(),
            base_url: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
}
