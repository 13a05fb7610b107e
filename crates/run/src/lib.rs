//! Picking the test target that most plausibly owns a source file.

pub mod chooser;
pub mod heuristic;

pub use chooser::TestTargetChooser;
pub use heuristic::{
    QualifiedClassNameHeuristic, TargetNameHeuristic, TestSizeHeuristic, TestSource,
    TestTargetHeuristic, TestTargetSourcesHeuristic,
};
