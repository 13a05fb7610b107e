use super::{TestSource, TestTargetHeuristic};
use ideinfo_api::models::TargetIdeInfo;

/// Matches targets that list the file among their sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestTargetSourcesHeuristic;

impl<C: ?Sized> TestTargetHeuristic<C> for TestTargetSourcesHeuristic {
    fn matches_source(&self, _ctx: &C, target: &TargetIdeInfo, source: &TestSource) -> bool {
        target
            .sources
            .iter()
            .filter(|s| !s.relative_path.is_empty())
            .any(|s| source.path.ends_with(&s.relative_path))
    }
}
