//! Property tests for `${NAME}` interpolation.

use proptest::prelude::*;

use pk3deploy::config::{TemplateError, Variables};

fn vars() -> Variables {
    Variables::new()
        .with("ARCH", "x86_64")
        .with("B", "/src/build/release-linux-x86_64")
        .with("SHLIBEXT", "so")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: interpolation never panics on arbitrary input.
    #[test]
    fn property_interpolate_never_panics(s in "(?s).{0,256}") {
        let _ = vars().interpolate(&s);
    }

    /// PROPERTY: text without `$` passes through unchanged.
    #[test]
    fn property_plain_text_is_identity(s in "[^$]{0,128}") {
        prop_assert_eq!(vars().interpolate(&s), Ok(s));
    }

    /// PROPERTY: doubling every `$` escapes it, so any text survives a
    /// round trip through interpolation.
    #[test]
    fn property_escaped_dollars_are_literal(s in "(?s).{0,128}") {
        let escaped = s.replace('$', "$$");
        prop_assert_eq!(vars().interpolate(&escaped), Ok(s));
    }

    /// PROPERTY: a known variable expands to its value wherever it appears.
    #[test]
    fn property_known_variable_expands(prefix in "[a-z/]{0,16}", suffix in "[a-z/.]{0,16}") {
        let input = format!("{}${{ARCH}}{}", prefix, suffix);
        prop_assert_eq!(
            vars().interpolate(&input),
            Ok(format!("{}x86_64{}", prefix, suffix))
        );
    }

    /// PROPERTY: an undefined name is reported, never substituted.
    #[test]
    fn property_unknown_variable_is_an_error(name in "[a-z][a-z0-9_]{0,12}") {
        let input = format!("${{{}}}", name);
        prop_assert_eq!(vars().interpolate(&input), Err(TemplateError::Unknown(name)));
    }
}
