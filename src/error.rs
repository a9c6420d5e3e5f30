//! Error types for registry construction and style resolution.
//!
//! Invalid query input (missing, empty, whitespace-only) is never an error: lookups return `None`. Errors are
//! reserved for failures the caller must see:
//! - a discovery descriptor whose constructor faulted ([`StyleSnifferError::Instantiation`]), and
//! - a configured style name that nothing registered answers to ([`StyleSnifferError::UnknownStyle`]).

use miette::Diagnostic;
use thiserror::Error;

/// Boxed cause reported by a faulting style constructor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while building or configuring a style registry.
#[derive(Debug, Error, Diagnostic)]
pub enum StyleSnifferError {
    #[error("failed to instantiate case style `{descriptor}`")]
    #[diagnostic(
        code(stylesniffer::instantiation),
        help("the style constructor reported an error; the cause is attached below")
    )]
    Instantiation {
        /// Identity of the descriptor that failed (its type name).
        descriptor: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("unknown case style `{name}`")]
    #[diagnostic(
        code(stylesniffer::unknown_style),
        help("run `stylesniffer list --variants` to see every accepted name")
    )]
    UnknownStyle { name: String },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, StyleSnifferError>;
