//! CLI command implementations
//!
//! Commands build their report as a [`CommandOutput`] instead of printing, so the rendering is testable. Printing
//! and exiting happen in the top-level `run()`.

use serde::Serialize;
use stylesniffer_core::CaseStyle;

use crate::config::OutputFormat;
use crate::error::StyleSnifferError;
use crate::registry::StyleRegistry;

use super::{CliError, CliResult, ExitCode};

/// Rendered report of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Report text, without a trailing newline
    pub text: String,
    pub exit_code: ExitCode,
}

impl CommandOutput {
    fn success(text: String) -> Self {
        Self {
            text,
            exit_code: ExitCode::SUCCESS,
        }
    }
}

#[derive(Debug, Serialize)]
struct SniffEntry<'a> {
    input: &'a str,
    style: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct StyleEntry {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variants: Option<Vec<&'static str>>,
}

impl StyleEntry {
    fn of(style: &dyn CaseStyle, include_variants: bool) -> Self {
        Self {
            name: style.canonical_name(),
            variants: include_variants.then(|| style.variant_names().into_iter().collect()),
        }
    }

    fn text_line(&self) -> String {
        match &self.variants {
            Some(variants) => format!("{}: {}", self.name, variants.join(", ")),
            None => self.name.to_string(),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::failure(format!("Error encoding report: {e}")))
}

// ============================================================================
// Commands
// ============================================================================

/// Classify each identifier against the registry.
///
/// Text lines read `<input> -> <style>`, with `-` for unmatched input. The exit code is 1 if any identifier is
/// unmatched.
pub fn sniff(registry: &StyleRegistry, identifiers: &[String], format: OutputFormat) -> CliResult<CommandOutput> {
    let entries: Vec<SniffEntry<'_>> = identifiers
        .iter()
        .map(|input| SniffEntry {
            input,
            style: registry
                .find_by_classification(input.as_str())
                .map(|style| style.canonical_name()),
        })
        .collect();

    let unmatched = entries.iter().filter(|e| e.style.is_none()).count();
    if unmatched > 0 {
        tracing::debug!(unmatched, total = entries.len(), "unclassified identifiers");
    }

    let text = match format {
        OutputFormat::Text => entries
            .iter()
            .map(|e| format!("{} -> {}", e.input, e.style.unwrap_or("-")))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => to_json(&entries)?,
    };

    Ok(CommandOutput {
        text,
        exit_code: if unmatched == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE },
    })
}

/// Resolve a canonical name or variant spelling to its registered style.
///
/// ## Errors
/// - `unknown case style` diagnostic (exit code 1) if nothing registered answers to `name`.
pub fn resolve(registry: &StyleRegistry, name: &str, format: OutputFormat) -> CliResult<CommandOutput> {
    let style = registry
        .find_by_name_or_variant(name)
        .ok_or_else(|| StyleSnifferError::UnknownStyle { name: name.to_string() })?;
    let entry = StyleEntry::of(style.as_ref(), true);

    let text = match format {
        OutputFormat::Text => entry.text_line(),
        OutputFormat::Json => to_json(&entry)?,
    };
    Ok(CommandOutput::success(text))
}

/// List the registered styles in registration order.
pub fn list(registry: &StyleRegistry, include_variants: bool, format: OutputFormat) -> CliResult<CommandOutput> {
    let entries: Vec<StyleEntry> = registry
        .styles()
        .iter()
        .map(|style| StyleEntry::of(style.as_ref(), include_variants))
        .collect();

    let text = match format {
        OutputFormat::Text => entries.iter().map(StyleEntry::text_line).collect::<Vec<_>>().join("\n"),
        OutputFormat::Json => to_json(&entries)?,
    };
    Ok(CommandOutput::success(text))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn defaults() -> StyleRegistry {
        StyleRegistry::with_defaults().unwrap()
    }

    fn idents(inputs: &[&str]) -> Vec<String> {
        inputs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sniff_text() {
        let output = sniff(&defaults(), &idents(&["someCamelCase", "SOME_VALUE"]), OutputFormat::Text).unwrap();
        assert_eq!(output.text, "someCamelCase -> camelCase\nSOME_VALUE -> SCREAMING_SNAKE_CASE");
        assert_eq!(output.exit_code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_sniff_unmatched_fails() {
        let output = sniff(&defaults(), &idents(&["snake_case", "not valid"]), OutputFormat::Text).unwrap();
        assert_eq!(output.text, "snake_case -> snake_case\nnot valid -> -");
        assert_eq!(output.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_sniff_json() {
        let output = sniff(&defaults(), &idents(&["param-case", " "]), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&output.text).unwrap();
        assert_eq!(
            value,
            json!([
                {"input": "param-case", "style": "Kebab Case"},
                {"input": " ", "style": null},
            ])
        );
    }

    #[test]
    fn test_resolve_text() {
        let output = resolve(&defaults(), "UpperCamelCase", OutputFormat::Text).unwrap();
        assert_eq!(output.text, "PascalCase: CamelCase, PascalCase, UpperCamelCase");
    }

    #[test]
    fn test_resolve_json() {
        let output = resolve(&defaults(), "LowerCamelCase", OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&output.text).unwrap();
        assert_eq!(value, json!({"name": "camelCase", "variants": ["LowerCamelCase", "camelCase"]}));
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve(&defaults(), "Train-Case", OutputFormat::Text).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("unknown case style `Train-Case`"));
    }

    #[test]
    fn test_list_without_variants() {
        let output = list(&defaults(), false, OutputFormat::Text).unwrap();
        assert_eq!(
            output.text,
            "PascalCase\ncamelCase\nsnake_case\nSCREAMING_SNAKE_CASE\nKebab Case"
        );
    }

    #[test]
    fn test_list_json_omits_variants_unless_asked() {
        let output = list(&defaults(), false, OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&output.text).unwrap();
        assert_eq!(value[0], json!({"name": "PascalCase"}));

        let output = list(&defaults(), true, OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&output.text).unwrap();
        assert_eq!(value[2], json!({"name": "snake_case", "variants": ["snake_case"]}));
    }

    #[test]
    fn test_list_empty_registry() {
        let output = list(&StyleRegistry::new(), true, OutputFormat::Text).unwrap();
        assert_eq!(output.text, "");
    }
}
