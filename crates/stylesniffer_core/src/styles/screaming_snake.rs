use crate::char_class::{CharClass, classes};
use crate::{CaseStyle, CaseStyleInfo};

/// `SCREAMING_SNAKE_CASE`: uppercase words joined by single underscores.
#[derive(Debug, Clone, Copy, Default, CaseStyleInfo)]
#[case_style(name = "SCREAMING_SNAKE_CASE")]
pub struct ScreamingSnakeCaseStyle;

impl CaseStyle for ScreamingSnakeCaseStyle {
    fn classify(&self, input: &str) -> bool {
        is_screaming_snake_case(input)
    }
}

/// Check whether `input` is SCREAMING_SNAKE_CASE.
///
/// ## Notes
/// - Only uppercase letters and `_` are allowed, and at least one `_` must be present.
/// - The first and last characters must not be `_`, and `__` is rejected.
pub fn is_screaming_snake_case(input: &str) -> bool {
    if input.starts_with('_') || input.ends_with('_') {
        return false;
    }

    let mut has_underscore = false;
    let mut last_was_underscore = false;
    for class in classes(input) {
        match class {
            CharClass::Underscore => {
                if last_was_underscore {
                    return false;
                }
                has_underscore = true;
                last_was_underscore = true;
            }
            CharClass::Upper => last_was_underscore = false,
            _ => return false,
        }
    }
    has_underscore
}
