use ideinfo_ingest::{RecordFormat, TranslateConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings read from `ideinfo.json`. Missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translate: TranslateConfig,
    /// Record format; guessed from the file extension when unset.
    pub format: Option<RecordFormat>,
}

impl Config {
    pub fn format_for(&self, path: &Path) -> RecordFormat {
        self.format.unwrap_or_else(|| RecordFormat::from_path(path))
    }
}

/// Loads `path` if given, otherwise returns the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(Config::default()),
    }
}
