use super::{TestSource, TestTargetHeuristic};
use ideinfo_api::models::TargetIdeInfo;

/// Matches targets named after the fully qualified test class,
/// e.g. `//javatests/com/foo:com.foo.FooTest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifiedClassNameHeuristic;

impl<C: ?Sized> TestTargetHeuristic<C> for QualifiedClassNameHeuristic {
    fn matches_source(&self, _ctx: &C, target: &TargetIdeInfo, source: &TestSource) -> bool {
        source
            .class_name
            .as_deref()
            .is_some_and(|name| target.label().target_name() == name)
    }
}
