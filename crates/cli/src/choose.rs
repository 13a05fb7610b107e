use ideinfo_api::models::TestSize;
use ideinfo_runtime::{build_default_chooser, read_targets};
use ideinfo_run::TestSource;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(
    source: PathBuf,
    targets_path: &Path,
    size: Option<TestSize>,
    class_name: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let targets = read_targets(targets_path)?;
    info!("Loaded {} candidate targets", targets.len());

    let mut test_source = TestSource::new(source);
    if let Some(size) = size {
        test_source = test_source.with_test_size(size);
    }
    if let Some(name) = class_name {
        test_source = test_source.with_class_name(name);
    }

    let candidates: Vec<_> = targets.iter().filter(|t| t.kind.is_test()).collect();
    let chooser = build_default_chooser::<()>();
    match chooser.choose_test_target_for_source_file(&(), &test_source, candidates) {
        Some(label) => println!("{}", label),
        None => {
            return Err(format!(
                "no test targets among {} targets in {}",
                targets.len(),
                targets_path.display()
            )
            .into());
        }
    }
    Ok(())
}
