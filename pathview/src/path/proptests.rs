//! Property-based tests for path handling.
//!
//! Note: each path module carries a few inline property tests. This module
//! runs the cross-module properties with many more cases.

use super::normalize::normalize;
use super::{PathComparator, PathRelationship, ReadablePathFormatter, StructuredPath};
use crate::Platform;
use proptest::prelude::*;

const PLATFORMS: [Platform; 2] = [Platform::Windows, Platform::Posix];

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn noisy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => path_component_strategy(),
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
            1 => Just(String::new()),
        ],
        0..10,
    )
    .prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn separator_normalization_idempotent(s in "[a-zA-Z/\\\\.?:]{0,24}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    // Equality is reflexive for every platform
    #[test]
    fn equality_reflexive(path in noisy_path_strategy()) {
        for platform in PLATFORMS {
            let cmp = PathComparator::new(platform);
            prop_assert!(cmp.equal(Some(path.as_str()), Some(path.as_str())));
        }
    }

    // Absence is never equal to presence
    #[test]
    fn equality_absent_asymmetry(path in noisy_path_strategy()) {
        for platform in PLATFORMS {
            let cmp = PathComparator::new(platform);
            prop_assert!(!cmp.equal(None, Some(path.as_str())));
            prop_assert!(!cmp.equal(Some(path.as_str()), None));
        }
    }

    // A path equals its own structural normalization
    #[test]
    fn equality_survives_structural_normalization(path in noisy_path_strategy()) {
        for platform in PLATFORMS {
            let cmp = PathComparator::new(platform);
            let structured = StructuredPath::parse(&path, platform).to_string();
            prop_assert!(cmp.equal(Some(path.as_str()), Some(structured.as_str())));
        }
    }

    // Equality is transitive across the raw, structured, and canonical forms
    #[test]
    fn equality_transitive(path in noisy_path_strategy()) {
        let cmp = PathComparator::new(Platform::Windows);
        let structured = StructuredPath::parse(&path, Platform::Windows).to_string();
        let upper = structured.to_uppercase();
        prop_assert!(cmp.equal(Some(path.as_str()), Some(structured.as_str())));
        prop_assert!(cmp.equal(Some(structured.as_str()), Some(upper.as_str())));
        prop_assert!(cmp.equal(Some(path.as_str()), Some(upper.as_str())));
    }

    // Readable output never contains a backslash
    #[test]
    fn readable_output_canonical(base in absolute_path_strategy(), target in noisy_path_strategy()) {
        for platform in PLATFORMS {
            let fmt = ReadablePathFormatter::new(platform);
            prop_assert!(!fmt.format(&base, Some(target.as_str())).contains('\\'));
        }
    }

    // A child of the base renders as exactly the appended segments
    #[test]
    fn readable_child_is_relative(base in absolute_path_strategy(), tail in prop::collection::vec(path_component_strategy(), 1..5)) {
        let target = format!("{base}/{}", tail.join("/"));
        for platform in PLATFORMS {
            let fmt = ReadablePathFormatter::new(platform);
            prop_assert_eq!(fmt.format(&base, Some(target.as_str())), tail.join("/"));
        }
    }

    // The base itself renders as its last segment
    #[test]
    fn readable_self_is_basename(base in absolute_path_strategy()) {
        let expected = base.rsplit('/').next().unwrap_or_default().to_string();
        for platform in PLATFORMS {
            let fmt = ReadablePathFormatter::new(platform);
            prop_assert_eq!(fmt.format(&base, None), expected.clone());
            prop_assert_eq!(fmt.format(&base, Some(base.as_str())), expected.clone());
        }
    }

    // Readable output never starts with a parent traversal for absolute targets
    #[test]
    fn readable_never_climbs(base in absolute_path_strategy(), target in noisy_path_strategy()) {
        let fmt = ReadablePathFormatter::new(Platform::Posix);
        let rendered = fmt.format(&base, Some(target.as_str()));
        prop_assert!(!rendered.starts_with(".."));
        prop_assert!(!rendered.starts_with("./"));
    }

    // Relationship types are mutually exclusive and agree with containment
    #[test]
    fn relationship_agrees_with_contains(a in noisy_path_strategy(), b in noisy_path_strategy()) {
        let cmp = PathComparator::new(Platform::Posix);
        let rel = cmp.relationship(&a, &b);
        let contains = cmp.contains(&a, &b);
        prop_assert_eq!(
            contains,
            matches!(rel, PathRelationship::Ancestor | PathRelationship::Same)
        );
    }
}
