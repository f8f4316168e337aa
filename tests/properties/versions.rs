//! Property tests for version comparison.

use proptest::prelude::*;

use pk3deploy::{Revision, SourceVersion};

fn revision() -> impl Strategy<Value = Revision> {
    "[0-9a-f]{7,40}".prop_map(|s| Revision::parse(&s).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a committed version matches exactly the identical revision.
    #[test]
    fn property_committed_matches_iff_equal(ours in revision(), theirs in revision()) {
        let version = SourceVersion::Committed(ours.clone());
        prop_assert!(version.matches(Some(&ours)));
        prop_assert_eq!(version.matches(Some(&theirs)), ours == theirs);
        prop_assert!(!version.matches(None));
    }

    /// PROPERTY: dirty and untracked trees never match any embedded version.
    #[test]
    fn property_uncommitted_never_matches(embedded in proptest::option::of(revision())) {
        prop_assert!(!SourceVersion::Dirty.matches(embedded.as_ref()));
        prop_assert!(!SourceVersion::Untracked.matches(embedded.as_ref()));
    }

    /// PROPERTY: parsing ignores surrounding whitespace from tool output.
    #[test]
    fn property_parse_trims(rev in "[0-9a-f]{40}", pad in "[ \t\r\n]{0,4}") {
        let raw = format!("{}{}{}", pad, rev, pad);
        prop_assert_eq!(Revision::parse(&raw).map(|r| r.as_str().to_string()), Some(rev));
    }
}
