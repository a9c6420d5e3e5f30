use crate::char_class::CharClass;
use crate::{CaseStyle, CaseStyleInfo};

/// Characters that can never appear in a PascalCase identifier.
pub const PASCAL_INVALID_CHARACTERS: &[char] = &['_', ' ', '-', '*', ',', '"', '\'', '#', '$', '@'];

/// `PascalCase` (upper camel case): starts with an uppercase letter.
#[derive(Debug, Clone, Copy, Default, CaseStyleInfo)]
#[case_style(name = "PascalCase", variants = ["UpperCamelCase", "CamelCase"])]
pub struct PascalCaseStyle;

impl CaseStyle for PascalCaseStyle {
    fn classify(&self, input: &str) -> bool {
        is_pascal_case(input)
    }
}

/// Check whether `input` is PascalCase.
///
/// ## Notes
/// - The first character must be an uppercase letter and none of [`PASCAL_INVALID_CHARACTERS`] may appear.
/// - Nothing else is checked: uppercase runs (`HTTPServer`, `ALLCAPS`) and digits (`Vec2`) are accepted.
pub fn is_pascal_case(input: &str) -> bool {
    let starts_upper = input.chars().next().is_some_and(|c| CharClass::of(c) == CharClass::Upper);
    starts_upper && !input.contains(PASCAL_INVALID_CHARACTERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pascal_case() {
        for input in ["SomePascalCase", "Pascal", "HTTPServer", "ALLCAPS", "Vec2"] {
            assert!(is_pascal_case(input), "{input}");
        }
    }

    #[test]
    fn test_requires_leading_uppercase() {
        assert!(!is_pascal_case("somePascalCase"));
        assert!(!is_pascal_case("2Pascal"));
        assert!(!is_pascal_case(""));
    }

    #[test]
    fn test_rejects_every_invalid_character() {
        for &c in PASCAL_INVALID_CHARACTERS {
            let input = format!("Pascal{c}Case");
            assert!(!is_pascal_case(&input), "{input}");
        }
    }

    #[test]
    fn test_rejects_screaming_snake_case() {
        assert!(!is_pascal_case("SOME_VALUE"));
    }
}
