//! Conformance checks for case style implementations.
//!
//! Every [`CaseStyle`] must:
//! - have a non-blank canonical name,
//! - list its canonical name among its variant names, and
//! - accept the inputs written in its style and reject everything else.
//!
//! The assertion helpers below check each rule; [`case_style_conformance!`] generates one `#[test]` per rule for a
//! style.
//!
//! ## Examples
//! ```rust
//! use stylesniffer_core::SnakeCaseStyle;
//! use stylesniffer_testkit::assert_conformance;
//!
//! assert_conformance(&SnakeCaseStyle, &["snake_case_input"], &["SomePascalCase"]);
//! ```

use stylesniffer_core::CaseStyle;

/// Assert that the style's canonical name is not blank.
///
/// # Panics
///
/// Panics if `canonical_name()` is empty or whitespace-only.
pub fn assert_has_valid_name(style: &dyn CaseStyle) {
    let name = style.canonical_name();
    if name.trim().is_empty() {
        panic!("each case style must return a non-blank canonical name, got {name:?}");
    }
}

/// Assert that the variant names are non-empty and contain the canonical name.
///
/// # Panics
///
/// Panics if the variant set is empty or misses `canonical_name()`.
pub fn assert_variants_contain_name(style: &dyn CaseStyle) {
    let name = style.canonical_name();
    let variants = style.variant_names();
    if variants.is_empty() {
        panic!("case style {name:?} returned no variant names");
    }
    if !variants.contains(name) {
        panic!("case style {name:?} does not list its canonical name among its variants: {variants:?}");
    }
}

/// Assert that every input is accepted by the style.
///
/// # Panics
///
/// Panics listing every rejected input.
pub fn assert_matches_all(style: &dyn CaseStyle, inputs: &[&str]) {
    let rejected: Vec<&str> = inputs.iter().copied().filter(|input| !style.classify(input)).collect();
    if !rejected.is_empty() {
        panic!(
            "expected {:?} to match every input, but it rejected: {:?}",
            style.canonical_name(),
            rejected
        );
    }
}

/// Assert that every input is rejected by the style.
///
/// # Panics
///
/// Panics listing every accepted input.
pub fn assert_rejects_all(style: &dyn CaseStyle, inputs: &[&str]) {
    let accepted: Vec<&str> = inputs.iter().copied().filter(|input| style.classify(input)).collect();
    if !accepted.is_empty() {
        panic!(
            "expected {:?} to reject every input, but it accepted: {:?}",
            style.canonical_name(),
            accepted
        );
    }
}

/// Run every conformance check against a style.
///
/// # Panics
///
/// Panics on the first failing check.
pub fn assert_conformance(style: &dyn CaseStyle, matching: &[&str], non_matching: &[&str]) {
    assert_has_valid_name(style);
    assert_variants_contain_name(style);
    assert_matches_all(style, matching);
    assert_rejects_all(style, non_matching);
}

/// Generate a test module running the conformance checks for a style.
///
/// # Example
/// ```ignore
/// stylesniffer_testkit::case_style_conformance!(
///     snake_case_conformance,
///     SnakeCaseStyle,
///     matching: ["snake_case_input", "another_input"],
///     non_matching: ["SomePascalCase", "someCamelCase"],
/// );
/// ```
#[macro_export]
macro_rules! case_style_conformance {
    (
        $mod_name:ident,
        $style:expr,
        matching: [$($matching:expr),* $(,)?],
        non_matching: [$($non_matching:expr),* $(,)?] $(,)?
    ) => {
        mod $mod_name {
            #[allow(unused_imports)]
            use super::*;

            #[test]
            fn name_is_not_blank() {
                $crate::assert_has_valid_name(&$style);
            }

            #[test]
            fn variant_names_contain_the_name() {
                $crate::assert_variants_contain_name(&$style);
            }

            #[test]
            fn matching_inputs_are_accepted() {
                $crate::assert_matches_all(&$style, &[$($matching),*]);
            }

            #[test]
            fn non_matching_inputs_are_rejected() {
                $crate::assert_rejects_all(&$style, &[$($non_matching),*]);
            }
        }
    };
}
