//! Property tests for newline-separated and array path lists.

use proptest::prelude::*;

use pk3deploy::config::PathList;

fn path_entry() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}(/[A-Za-z0-9._-]{1,12}){0,3}").unwrap()
}

fn padding() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ \t]{0,3}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a multi-line string and an array with the same entries
    /// describe the same list, whatever the padding and blank lines.
    #[test]
    fn property_lines_and_array_agree(
        entries in proptest::collection::vec((path_entry(), padding(), padding(), any::<bool>()), 0..8)
    ) {
        let mut text = String::new();
        for (entry, before, after, blank_line) in &entries {
            if *blank_line {
                text.push('\n');
            }
            text.push_str(before);
            text.push_str(entry);
            text.push_str(after);
            text.push('\n');
        }
        let expected: Vec<String> = entries.iter().map(|(e, ..)| e.clone()).collect();

        prop_assert_eq!(PathList::Lines(text).entries(), expected.clone());
        prop_assert_eq!(PathList::List(expected.clone()).entries(), expected);
    }

    /// PROPERTY: entries never carry surrounding whitespace or come out empty.
    #[test]
    fn property_entries_are_trimmed_and_non_empty(s in "(?s).{0,256}") {
        for entry in PathList::Lines(s).entries() {
            prop_assert!(!entry.is_empty());
            prop_assert_eq!(entry.trim(), entry.as_str());
        }
    }
}
