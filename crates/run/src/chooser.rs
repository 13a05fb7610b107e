use crate::heuristic::{
    QualifiedClassNameHeuristic, TargetNameHeuristic, TestSizeHeuristic, TestSource,
    TestTargetHeuristic, TestTargetSourcesHeuristic,
};
use ideinfo_api::models::{Label, TargetIdeInfo};
use tracing::{debug, trace};

/// Chooses the test target for a source file among several candidates.
///
/// Heuristics run in the order given. Whenever one matches some of the
/// remaining candidates, the candidates are narrowed to those matches; a
/// single match is returned right away. Otherwise the first remaining
/// candidate wins, so without any match the first input candidate is the
/// answer. Candidate order is never changed.
pub struct TestTargetChooser<C: ?Sized> {
    heuristics: Vec<Box<dyn TestTargetHeuristic<C>>>,
}

impl<C: ?Sized> TestTargetChooser<C> {
    pub fn new(heuristics: Vec<Box<dyn TestTargetHeuristic<C>>>) -> Self {
        Self { heuristics }
    }

    /// Sources, then target name, then qualified class name, then test size.
    pub fn with_default_heuristics() -> Self {
        Self::new(vec![
            Box::new(TestTargetSourcesHeuristic),
            Box::new(TargetNameHeuristic),
            Box::new(QualifiedClassNameHeuristic),
            Box::new(TestSizeHeuristic),
        ])
    }

    pub fn heuristics(&self) -> impl Iterator<Item = &dyn TestTargetHeuristic<C>> {
        self.heuristics.iter().map(|h| h.as_ref())
    }

    pub fn choose_test_target<'t, I>(
        &self,
        ctx: &C,
        source: &TestSource,
        targets: I,
    ) -> Option<&'t TargetIdeInfo>
    where
        I: IntoIterator<Item = &'t TargetIdeInfo>,
    {
        let mut remaining: Vec<&'t TargetIdeInfo> = targets.into_iter().collect();
        if remaining.is_empty() {
            return None;
        }

        for heuristic in &self.heuristics {
            let matches: Vec<&'t TargetIdeInfo> = remaining
                .iter()
                .copied()
                .filter(|target| heuristic.matches_source(ctx, target, source))
                .collect();
            trace!(
                heuristic = heuristic.name(),
                matched = matches.len(),
                "applied test target heuristic"
            );
            match matches.len() {
                0 => {}
                1 => return matches.into_iter().next(),
                _ => remaining = matches,
            }
        }

        debug!(
            source = %source.path.display(),
            candidates = remaining.len(),
            "no unique test target, taking the first candidate"
        );
        remaining.first().copied()
    }

    pub fn choose_test_target_for_source_file<'t, I>(
        &self,
        ctx: &C,
        source: &TestSource,
        targets: I,
    ) -> Option<Label>
    where
        I: IntoIterator<Item = &'t TargetIdeInfo>,
    {
        self.choose_test_target(ctx, source, targets)
            .map(|target| target.label().clone())
    }
}

impl<C: ?Sized> Default for TestTargetChooser<C> {
    fn default() -> Self {
        Self::with_default_heuristics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideinfo_api::models::{Kind, TargetKey, TestIdeInfo, TestSize};

    fn java_test(label: &str) -> TargetIdeInfo {
        TargetIdeInfo::builder(
            TargetKey::for_plain_target(Label::parse(label).unwrap()),
            Kind::JavaTest,
        )
        .build()
    }

    struct AlwaysMatch;
    impl TestTargetHeuristic<()> for AlwaysMatch {
        fn matches_source(&self, _: &(), _: &TargetIdeInfo, _: &TestSource) -> bool {
            true
        }
    }

    struct PackageIs(&'static str);
    impl TestTargetHeuristic<()> for PackageIs {
        fn matches_source(&self, _: &(), target: &TargetIdeInfo, _: &TestSource) -> bool {
            target.label().package() == self.0
        }
    }

    #[test]
    fn test_empty_candidates() {
        let chooser = TestTargetChooser::<()>::default();
        let targets: Vec<TargetIdeInfo> = vec![];
        assert!(
            chooser
                .choose_test_target_for_source_file(&(), &TestSource::new("FooTest.java"), &targets)
                .is_none()
        );
    }

    #[test]
    fn test_later_heuristics_narrow_further() {
        let chooser: TestTargetChooser<()> =
            TestTargetChooser::new(vec![Box::new(AlwaysMatch), Box::new(PackageIs("b"))]);
        let targets = vec![java_test("//a:T"), java_test("//b:T"), java_test("//c:T")];
        let chosen = chooser
            .choose_test_target_for_source_file(&(), &TestSource::new("T.java"), &targets)
            .unwrap();
        assert_eq!(chosen.to_string(), "//b:T");
    }

    #[test]
    fn test_non_matching_heuristic_keeps_candidates() {
        let chooser: TestTargetChooser<()> =
            TestTargetChooser::new(vec![Box::new(PackageIs("zzz")), Box::new(PackageIs("c"))]);
        let targets = vec![java_test("//a:T"), java_test("//c:T")];
        let chosen = chooser
            .choose_test_target_for_source_file(&(), &TestSource::new("T.java"), &targets)
            .unwrap();
        assert_eq!(chosen.to_string(), "//c:T");
    }

    #[test]
    fn test_size_breaks_name_ties() {
        let small = TargetIdeInfo::builder(
            TargetKey::for_plain_target(Label::parse("//foo:small/FooTest").unwrap()),
            Kind::JavaTest,
        )
        .test_ide_info(Some(TestIdeInfo::new(TestSize::Small)))
        .build();
        let large = TargetIdeInfo::builder(
            TargetKey::for_plain_target(Label::parse("//foo:FooTest").unwrap()),
            Kind::JavaTest,
        )
        .test_ide_info(Some(TestIdeInfo::new(TestSize::Large)))
        .build();
        let targets = vec![java_test("//other:OtherTest"), small, large];

        let chooser = TestTargetChooser::<()>::default();
        let source = TestSource::new("javatests/small/FooTest.java").with_test_size(TestSize::Large);
        let chosen = chooser
            .choose_test_target_for_source_file(&(), &source, &targets)
            .unwrap();
        assert_eq!(chosen.to_string(), "//foo:FooTest");
    }

    #[test]
    fn test_default_chain_order() {
        let chooser = TestTargetChooser::<()>::default();
        let names: Vec<&str> = chooser.heuristics().map(|h| h.name()).collect();
        assert_eq!(names.len(), 4);
        assert!(names[0].ends_with("TestTargetSourcesHeuristic"));
        assert!(names[1].ends_with("TargetNameHeuristic"));
        assert!(names[2].ends_with("QualifiedClassNameHeuristic"));
        assert!(names[3].ends_with("TestSizeHeuristic"));
    }
}
