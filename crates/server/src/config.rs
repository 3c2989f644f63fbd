use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Parse a config file's contents, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Read `config.toml` once and keep it for the process lifetime.
///
/// Only the first call reads the file. A missing or unparseable file
/// yields the defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(?config, "config loaded");
            config
        }
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "config not found, using defaults");
            AppConfig::default()
        }
    })
}
