//! Provide the case style vocabulary and classification automata shared by stylesniffer and its tooling.
//!
//! This crate is intentionally small and dependency-light. It contains:
//! - the [`CaseStyle`] / [`NamedStyle`] traits every naming convention implements,
//! - the character classification ([`CharClass`]) the automata scan with, and
//! - the five built-in styles (PascalCase, camelCase, snake_case, SCREAMING_SNAKE_CASE, kebab-case).
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, no registry. Registration and lookup live in
//!   the `stylesniffer` crate.
//! - Classification is case-sensitive and never trims; input sanitization is the registry's job.
//!
//! ## Examples
//! ```rust
//! use stylesniffer_core::{CaseStyle, NamedStyle, SnakeCaseStyle};
//!
//! let style = SnakeCaseStyle;
//! assert!(style.classify("snake_case_input"));
//! assert!(!style.classify("SCREAMING_SNAKE_CASE"));
//! assert_eq!(style.canonical_name(), "snake_case");
//! ```

// Lets `#[derive(CaseStyleInfo)]` expand to `::stylesniffer_core::...` paths inside this crate too.
extern crate self as stylesniffer_core;

pub mod builtin;
pub mod char_class;
pub mod style;
pub mod styles;

pub use builtin::BuiltinStyle;
pub use char_class::CharClass;
pub use style::{CaseStyle, NamedStyle, StyleRef, has_consistent_names};
pub use styles::{
    KebabCaseStyle, LowerCamelCaseStyle, PASCAL_INVALID_CHARACTERS, PascalCaseStyle, ScreamingSnakeCaseStyle,
    SnakeCaseStyle,
};
pub use stylesniffer_derive::CaseStyleInfo;
