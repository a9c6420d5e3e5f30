//! Stable identifiers for the built-in case styles.
//!
//! [`BuiltinStyle::ALL`] lists the styles in their default registration order, which is also the order in which
//! a registry resolves ambiguous classifications.

use crate::{CaseStyle, KebabCaseStyle, LowerCamelCaseStyle, PascalCaseStyle, ScreamingSnakeCaseStyle, SnakeCaseStyle};

/// Identify one of the built-in case styles.
///
/// ## Examples
/// ```rust
/// use stylesniffer_core::BuiltinStyle;
///
/// assert_eq!(BuiltinStyle::Kebab.style().canonical_name(), "Kebab Case");
/// assert!(BuiltinStyle::Snake.style().classify("snake_case"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinStyle {
    Pascal,
    LowerCamel,
    Snake,
    ScreamingSnake,
    Kebab,
}

static PASCAL: PascalCaseStyle = PascalCaseStyle;
static LOWER_CAMEL: LowerCamelCaseStyle = LowerCamelCaseStyle;
static SNAKE: SnakeCaseStyle = SnakeCaseStyle;
static SCREAMING_SNAKE: ScreamingSnakeCaseStyle = ScreamingSnakeCaseStyle;
static KEBAB: KebabCaseStyle = KebabCaseStyle;

impl BuiltinStyle {
    /// Every built-in style, in default registration order.
    pub const ALL: [BuiltinStyle; 5] = [
        BuiltinStyle::Pascal,
        BuiltinStyle::LowerCamel,
        BuiltinStyle::Snake,
        BuiltinStyle::ScreamingSnake,
        BuiltinStyle::Kebab,
    ];

    /// Borrow the shared instance of this style.
    pub fn style(self) -> &'static dyn CaseStyle {
        match self {
            BuiltinStyle::Pascal => &PASCAL,
            BuiltinStyle::LowerCamel => &LOWER_CAMEL,
            BuiltinStyle::Snake => &SNAKE,
            BuiltinStyle::ScreamingSnake => &SCREAMING_SNAKE,
            BuiltinStyle::Kebab => &KEBAB,
        }
    }
}
