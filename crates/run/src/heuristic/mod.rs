//! Matching strategies for [`TestTargetChooser`](crate::TestTargetChooser).
//!
//! Each heuristic answers a yes/no question for a single target and source
//! file. The chooser combines them in priority order.

mod name;
mod qualified;
mod size;
mod sources;

pub use name::TargetNameHeuristic;
pub use qualified::QualifiedClassNameHeuristic;
pub use size::TestSizeHeuristic;
pub use sources::TestTargetSourcesHeuristic;

use ideinfo_api::models::{TargetIdeInfo, TestSize};
use std::path::PathBuf;

/// The source file a test target is being looked up for, plus whatever the
/// caller already knows about the test inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSource {
    pub path: PathBuf,
    pub test_size: Option<TestSize>,
    /// Fully qualified name of the test class, e.g. `com.foo.FooTest`.
    pub class_name: Option<String>,
}

impl TestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            test_size: None,
            class_name: None,
        }
    }

    pub fn with_test_size(mut self, size: TestSize) -> Self {
        self.test_size = Some(size);
        self
    }

    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }
}

/// Decides whether `target` plausibly owns the test in `source`.
///
/// `ctx` is the caller's project context. It is passed through untouched so
/// heuristics outside this crate can consult it.
pub trait TestTargetHeuristic<C: ?Sized>: Send + Sync {
    fn matches_source(&self, ctx: &C, target: &TargetIdeInfo, source: &TestSource) -> bool;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
