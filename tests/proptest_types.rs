//! Property-based tests for the identity model and report determinism.

use align_tools::{ArtifactRef, Project, ProjectComparator, WildcardMap};
use proptest::prelude::*;

fn artifact_strategy() -> impl Strategy<Value = ArtifactRef> {
    (
        "[a-z]{1,6}",
        "[a-z]{1,6}",
        prop::option::of("[a-z]{3}"),
        "[0-9]\\.[0-9]",
    )
        .prop_map(|(group, artifact, classifier, version)| {
            ArtifactRef::new(group, artifact, None, classifier.as_deref(), version)
        })
}

proptest! {
    #[test]
    fn identity_equality_ignores_version(dep in artifact_strategy(), version in "[0-9]\\.[0-9]") {
        let mut other = dep.clone();
        other.version = version;
        prop_assert_eq!(&dep, &other);
    }

    #[test]
    fn identical_trees_report_no_changes(
        deps in prop::collection::vec(artifact_strategy(), 0..8)
    ) {
        let mut project = Project::new("g", "a", "1.0");
        project.dependencies = deps;

        let relocations = WildcardMap::new();
        let report = ProjectComparator::new(&relocations, false)
            .compare(&[project.clone()], &[project]);
        prop_assert_eq!(report.changes, 0);
    }

    #[test]
    fn report_is_independent_of_declaration_order(
        deps in prop::collection::vec(artifact_strategy(), 0..8)
    ) {
        let mut old = Project::new("g", "a", "1.0");
        old.dependencies = deps;
        let mut new = old.clone();
        for dep in &mut new.dependencies {
            dep.version.push_str(".1");
        }

        let relocations = WildcardMap::new();
        let comparator = ProjectComparator::new(&relocations, true);
        let baseline = comparator.compare(&[old.clone()], &[new.clone()]);

        let mut shuffled_old = old;
        shuffled_old.dependencies.reverse();
        let mut shuffled_new = new;
        shuffled_new.dependencies.reverse();
        let shuffled = comparator.compare(&[shuffled_old], &[shuffled_new]);

        prop_assert_eq!(baseline.text, shuffled.text);
    }
}
