pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, load_config};

use ideinfo_api::models::TargetIdeInfo;
use ideinfo_ingest::{IngestError, TranslationReport, read_records, translate_all};
use ideinfo_run::TestTargetChooser;
use std::path::Path;

/// Initializes the logging system for a specific component.
/// This delegates to the logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    logging::init_logging(component, to_stderr)
}

/// Reads and translates an aspect output file using the configured format and
/// parallelism.
pub fn translate_file(path: &Path, config: &Config) -> Result<TranslationReport, IngestError> {
    let format = config.format_for(path);
    tracing::info!("Reading {:?} records from {}", format, path.display());
    let records = read_records(path, format)?;
    Ok(translate_all(&records, &config.translate))
}

/// The chooser with every built-in heuristic registered.
pub fn build_default_chooser<C: ?Sized>() -> TestTargetChooser<C> {
    TestTargetChooser::with_default_heuristics()
}

/// Reads targets previously written as a JSON array, e.g. by `ideinfo translate --output`.
pub fn read_targets(path: &Path) -> Result<Vec<TargetIdeInfo>, IngestError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
