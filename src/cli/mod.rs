//! CLI module for stylesniffer
//!
//! ## Commands
//!
//! - `sniff <IDENT>...` - Classify identifiers
//! - `resolve <NAME>` - Resolve a style name or variant to its canonical style
//! - `list [--variants]` - List the registered styles
//!
//! Global flags: `--format text|json` and `--styles a,b,c` (restrict and order the registry).
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::{OutputFormat, SnifferConfig};
use crate::error::StyleSnifferError;

pub use commands::CommandOutput;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Carries a user-facing message and the exit code `run()` terminates with.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<StyleSnifferError> for CliError {
    fn from(err: StyleSnifferError) -> Self {
        // Render through miette so the diagnostic code and help text reach the terminal.
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Detect the naming convention of identifiers
#[derive(Parser, Debug)]
#[command(name = "stylesniffer")]
#[command(version = VERSION)]
#[command(about = "Detect the naming convention of identifiers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Comma-separated styles to register, in order (names or variants)
    #[arg(long, global = true, value_delimiter = ',', value_name = "STYLES")]
    pub styles: Option<Vec<String>>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify identifiers (exits 1 if any is unmatched)
    Sniff {
        /// Identifiers to classify
        #[arg(value_name = "IDENT", required = true)]
        identifiers: Vec<String>,
    },

    /// Resolve a style name or variant to its canonical style
    Resolve {
        /// Canonical name or variant spelling
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// List the registered styles
    List {
        /// Include every variant spelling
        #[arg(long)]
        variants: bool,
    },
}

impl Cli {
    /// Configuration described by the parsed flags.
    pub fn config(&self) -> SnifferConfig {
        let mut config = SnifferConfig::new().with_output(self.format);
        if let Command::List { variants } = self.command {
            config = config.with_include_variants(variants);
        }
        if let Some(styles) = &self.styles {
            config = config.with_styles(styles.iter().cloned());
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and print its report.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let output = render(&cli)?;
    println!("{}", output.text);
    Ok(output.exit_code)
}

/// Run the parsed command and return its report without printing it.
pub fn render(cli: &Cli) -> CliResult<CommandOutput> {
    let config = cli.config();
    let registry = config.build_registry()?;
    tracing::debug!(styles = registry.len(), format = ?config.output, "registry ready");

    match &cli.command {
        Command::Sniff { identifiers } => commands::sniff(&registry, identifiers, config.output),
        Command::Resolve { name } => commands::resolve(&registry, name, config.output),
        Command::List { .. } => commands::list(&registry, config.include_variants, config.output),
    }
}

// ============================================================================
// Tests
// ============================================================================
