#![forbid(unsafe_code)]
//! Stylesniffer: detect the naming convention of identifiers.
//!
//! The case styles themselves (`camelCase`, `PascalCase`, `snake_case`, `SCREAMING_SNAKE_CASE`, `kebab-case`) live in
//! `stylesniffer_core`. This crate assembles them into a [`StyleRegistry`] and offers lookups by classification and by
//! name, plus the `stylesniffer` CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Invalid input**: Missing, empty and whitespace-only queries are not errors; lookups return `None`.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod registry;
pub mod shared;

pub use config::{OutputFormat, SnifferConfig};
pub use discovery::{StyleDescriptor, discovered_case_styles};
pub use error::{Result, StyleSnifferError};
pub use registry::{StyleRegistry, sanitize_input};
pub use shared::SharedStyleRegistry;
