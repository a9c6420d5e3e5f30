//! The built-in case styles.
//!
//! Each style is a stateless unit struct running a single left-to-right scan over [`crate::CharClass`]es. The
//! scan functions are public as well (`is_snake_case`, ...) for callers that don't need a style object.

mod kebab;
mod lower_camel;
mod pascal;
mod screaming_snake;
mod snake;

pub use kebab::{KebabCaseStyle, is_kebab_case};
pub use lower_camel::{LowerCamelCaseStyle, is_lower_camel_case};
pub use pascal::{PASCAL_INVALID_CHARACTERS, PascalCaseStyle, is_pascal_case};
pub use screaming_snake::{ScreamingSnakeCaseStyle, is_screaming_snake_case};
pub use snake::{SnakeCaseStyle, is_snake_case};
