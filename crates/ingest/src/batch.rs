use crate::translate::translate_target;
use crate::wire;
use ideinfo_api::models::TargetIdeInfo;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Translate records on the rayon pool.
    pub parallel: bool,
    /// Smallest batch worth fanning out.
    pub parallel_threshold: usize,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslationReport {
    /// Translated targets, in record order.
    pub targets: Vec<TargetIdeInfo>,
    /// Records that produced no target.
    pub skipped: usize,
}

pub fn translate_all(records: &[wire::TargetIdeInfo], config: &TranslateConfig) -> TranslationReport {
    let results: Vec<Option<TargetIdeInfo>> =
        if config.parallel && records.len() >= config.parallel_threshold {
            records.par_iter().map(translate_target).collect()
        } else {
            records.iter().map(translate_target).collect()
        };

    let total = results.len();
    let targets: Vec<TargetIdeInfo> = results.into_iter().flatten().collect();
    let skipped = total - targets.len();

    info!(
        "Translated {} of {} records ({} skipped)",
        targets.len(),
        total,
        skipped
    );

    TranslationReport { targets, skipped }
}
