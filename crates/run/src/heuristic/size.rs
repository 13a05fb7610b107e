use super::{TestSource, TestTargetHeuristic};
use ideinfo_api::models::TargetIdeInfo;

/// Matches targets whose test size equals the size declared on the test.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestSizeHeuristic;

impl<C: ?Sized> TestTargetHeuristic<C> for TestSizeHeuristic {
    fn matches_source(&self, _ctx: &C, target: &TargetIdeInfo, source: &TestSource) -> bool {
        match (source.test_size, target.test_ide_info) {
            (Some(wanted), Some(info)) => info.test_size == wanted,
            _ => false,
        }
    }
}
