use super::{TestSource, TestTargetHeuristic};
use ideinfo_api::models::TargetIdeInfo;

/// Matches when the target is named after the source file.
///
/// `//foo:FooTest` matches `java/com/foo/FooTest.java`. A target name with a
/// directory part (`//foo:foo/FooTest`) additionally requires the source's
/// parent directories to end with that part. Names are compared whole, so
/// `FooTest` never matches `BarFooTest.java`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetNameHeuristic;

impl<C: ?Sized> TestTargetHeuristic<C> for TargetNameHeuristic {
    fn matches_source(&self, _ctx: &C, target: &TargetIdeInfo, source: &TestSource) -> bool {
        let Some(stem) = source.path.file_stem().and_then(|s| s.to_str()) else {
            return false;
        };
        let label = target.label();
        if label.simple_name() != stem {
            return false;
        }
        match label.name_directory() {
            None => true,
            Some(dir) => source
                .path
                .parent()
                .is_some_and(|parent| parent.ends_with(dir)),
        }
    }
}
