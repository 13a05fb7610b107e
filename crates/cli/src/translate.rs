use ideinfo_runtime::Config;
use std::path::Path;
use tracing::info;

pub fn run(input: &Path, output: Option<&Path>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let report = ideinfo_runtime::translate_file(input, config)?;
    let json = serde_json::to_string_pretty(&report.targets)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Wrote {} targets to {}", report.targets.len(), path.display());
        }
        None => println!("{}", json),
    }

    if report.skipped > 0 {
        info!("Skipped {} unrecognised records", report.skipped);
    }
    Ok(())
}
