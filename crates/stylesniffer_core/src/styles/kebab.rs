use crate::char_class::{CharClass, classes};
use crate::{CaseStyle, CaseStyleInfo};

/// `kebab-case`: lowercase letters separated by dashes.
///
/// The canonical name is `"Kebab Case"`; the dashed spellings are all variants.
#[derive(Debug, Clone, Copy, Default, CaseStyleInfo)]
#[case_style(
    name = "Kebab Case",
    variants = [
        "caterpillar-case",
        "param-case",
        "dash-case",
        "hyphen-case",
        "lisp-case",
        "spinal-case",
        "css-case",
    ]
)]
pub struct KebabCaseStyle;

impl CaseStyle for KebabCaseStyle {
    fn classify(&self, input: &str) -> bool {
        is_kebab_case(input)
    }
}

/// Check whether `input` is kebab-case.
///
/// ## Notes
/// - Only lowercase letters and `-` are allowed, and at least one `-` must be present.
/// - Any uppercase letter rejects.
pub fn is_kebab_case(input: &str) -> bool {
    let mut has_dash = false;
    for class in classes(input) {
        match class {
            CharClass::Dash => has_dash = true,
            CharClass::Lower => {}
            _ => return false,
        }
    }
    has_dash
}
