use crate::char_class::{CharClass, classes};
use crate::{CaseStyle, CaseStyleInfo};

/// `camelCase` (lower camel case): starts lowercase, words start with a single uppercase letter.
#[derive(Debug, Clone, Copy, Default, CaseStyleInfo)]
#[case_style(name = "camelCase", variants = ["LowerCamelCase"])]
pub struct LowerCamelCaseStyle;

impl CaseStyle for LowerCamelCaseStyle {
    fn classify(&self, input: &str) -> bool {
        is_lower_camel_case(input)
    }
}

/// Check whether `input` is camelCase.
///
/// ## Notes
/// - The first character must be a lowercase letter; every other character must be a letter.
/// - Two uppercase letters in a row are rejected (`parseHTTP` is not camelCase), a lowercase letter resets the
///   run.
/// - A single lowercase word (`camel`) is camelCase.
pub fn is_lower_camel_case(input: &str) -> bool {
    let mut scan = classes(input);
    if scan.next() != Some(CharClass::Lower) {
        return false;
    }

    let mut last_was_upper = false;
    for class in scan {
        match class {
            CharClass::Upper => {
                if last_was_upper {
                    return false;
                }
                last_was_upper = true;
            }
            CharClass::Lower => last_was_upper = false,
            _ => return false,
        }
    }
    true
}
