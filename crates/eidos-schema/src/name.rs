//! Sanitization of datatype names into the schema-registry key space.

use std::fmt::Write;

/// Rewrites an arbitrary string into the `^[A-Za-z0-9._-]+$` grammar
/// required for schema-registry keys.
///
/// ASCII alphanumerics and `.`, `_`, `-` are copied unchanged; every other
/// code point `c` is replaced by `_<decimal value of c>_`. The empty string
/// sanitizes to the empty string, which the grammar rejects; rejecting or
/// upgrading empty names is the registry's responsibility, not this
/// function's.
///
/// The escape scheme is not collision-free: an input already containing a
/// literal `_<digits>_` run can coincide with the escaped form of a
/// different name. The ambiguity is intentional and kept as-is.
///
/// # Example
///
/// ```
/// use eidos_schema::sanitize;
///
/// assert_eq!(sanitize("Either.Left"), "Either.Left");
/// assert_eq!(sanitize("a/b"), "a_47_b");
/// ```
#[must_use]
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            out.push(c);
        } else {
            // Infallible for String targets.
            let _ = write!(out, "_{}_", c as u32);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_clean(s: &str) -> bool {
        s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    }

    #[test]
    fn test_clean_names_pass_through() {
        assert_eq!(sanitize("User"), "User");
        assert_eq!(sanitize("api.v1.User-Record_2"), "api.v1.User-Record_2");
    }

    #[test]
    fn test_escape_uses_decimal_code_point() {
        assert_eq!(sanitize("a/b"), "a_47_b");
        assert_eq!(sanitize("Pair Int"), "Pair_32_Int");
        assert_eq!(sanitize("Maybe<T>"), "Maybe_60_T_62_");
    }

    #[test]
    fn test_unicode_escapes() {
        // U+00E9 LATIN SMALL LETTER E WITH ACUTE
        assert_eq!(sanitize("caf\u{e9}"), "caf_233_");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_known_ambiguity_is_preserved() {
        // "_65_" is both a clean name and the escape of "A"; neither side
        // is disambiguated.
        assert_eq!(sanitize("_65_"), "_65_");
    }

    proptest! {
        #[test]
        fn prop_sanitized_output_matches_grammar(s in ".*") {
            prop_assert!(is_clean(&sanitize(&s)));
        }

        #[test]
        fn prop_clean_input_is_fixed_point(s in "[A-Za-z0-9._-]+") {
            prop_assert_eq!(sanitize(&s), s);
        }

        #[test]
        fn prop_sanitize_is_idempotent(s in ".*") {
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once);
        }
    }
}
