use crate::char_class::{CharClass, classes};
use crate::{CaseStyle, CaseStyleInfo};

/// `snake_case`: lowercase letters separated by underscores.
#[derive(Debug, Clone, Copy, Default, CaseStyleInfo)]
#[case_style(name = "snake_case")]
pub struct SnakeCaseStyle;

impl CaseStyle for SnakeCaseStyle {
    fn classify(&self, input: &str) -> bool {
        is_snake_case(input)
    }
}

/// Check whether `input` is snake_case.
///
/// ## Notes
/// - Only lowercase letters and `_` are allowed, and at least one `_` must be present.
/// - Leading, trailing or repeated underscores are accepted.
pub fn is_snake_case(input: &str) -> bool {
    let mut has_underscore = false;
    for class in classes(input) {
        match class {
            CharClass::Underscore => has_underscore = true,
            CharClass::Lower => {}
            _ => return false,
        }
    }
    has_underscore
}
