//! Sniffer configuration
//!
//! Selects the output format of the CLI and, optionally, the subset and order of styles the registry is built with.

use clap::ValueEnum;

use crate::error::{Result, StyleSnifferError};
use crate::registry::StyleRegistry;

/// Output format for CLI reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per entry
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Sniffer configuration
#[derive(Debug, Clone, Default)]
pub struct SnifferConfig {
    /// Report format
    pub output: OutputFormat,
    /// Whether listings include every variant spelling
    pub include_variants: bool,
    /// Styles to register, by name or variant, in registration order. `None` registers every built-in.
    pub styles: Option<Vec<String>>,
}

impl SnifferConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Include variant spellings in listings
    pub fn with_include_variants(mut self, include: bool) -> Self {
        self.include_variants = include;
        self
    }

    /// Restrict and order the registered styles
    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles = Some(styles.into_iter().map(Into::into).collect());
        self
    }

    /// Build the registry this config describes.
    ///
    /// ## Notes
    /// - Each configured name is resolved against the built-in styles with
    ///   [`StyleRegistry::find_by_name_or_variant`], so `"UpperCamelCase"` selects PascalCase.
    /// - The configured order becomes the registration order.
    ///
    /// ## Errors
    /// - [`StyleSnifferError::Instantiation`] if a built-in style cannot be constructed.
    /// - [`StyleSnifferError::UnknownStyle`] for the first name no built-in answers to.
    pub fn build_registry(&self) -> Result<StyleRegistry> {
        let defaults = StyleRegistry::with_defaults()?;
        let Some(names) = &self.styles else {
            return Ok(defaults);
        };

        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            let style = defaults
                .find_by_name_or_variant(name.as_str())
                .ok_or_else(|| StyleSnifferError::UnknownStyle { name: name.clone() })?;
            selected.push(style);
        }

        let mut registry = StyleRegistry::new();
        registry.register(selected);
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(registry: &StyleRegistry) -> Vec<&'static str> {
        registry.styles().iter().map(|s| s.canonical_name()).collect()
    }

    // ========================================
    // Defaults
    // ========================================

    #[test]
    fn test_default_config() {
        let config = SnifferConfig::default();
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.include_variants);
        assert!(config.styles.is_none());
    }

    #[test]
    fn test_default_registry_holds_every_builtin() {
        let registry = SnifferConfig::new().build_registry().unwrap();
        assert_eq!(
            names(&registry),
            ["PascalCase", "camelCase", "snake_case", "SCREAMING_SNAKE_CASE", "Kebab Case"]
        );
    }

    // ========================================
    // Builders
    // ========================================

    #[test]
    fn test_builders() {
        let config = SnifferConfig::new()
            .with_output(OutputFormat::Json)
            .with_include_variants(true)
            .with_styles(["snake_case"]);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.include_variants);
        assert_eq!(config.styles, Some(vec!["snake_case".to_string()]));
    }

    // ========================================
    // Style selection
    // ========================================

    #[test]
    fn test_selection_follows_configured_order() {
        let registry = SnifferConfig::new()
            .with_styles(["param-case", "UpperCamelCase", "snake_case"])
            .build_registry()
            .unwrap();
        assert_eq!(names(&registry), ["Kebab Case", "PascalCase", "snake_case"]);
        assert!(registry.find_by_classification("someCamelCase").is_none());
    }

    #[test]
    fn test_unknown_style_is_reported() {
        let err = SnifferConfig::new()
            .with_styles(["snake_case", "Train-Case"])
            .build_registry()
            .unwrap_err();
        assert!(matches!(err, StyleSnifferError::UnknownStyle { ref name } if name == "Train-Case"));
    }

    #[test]
    fn test_empty_selection_builds_empty_registry() {
        let registry = SnifferConfig::new()
            .with_styles(Vec::<String>::new())
            .build_registry()
            .unwrap();
        assert!(registry.is_empty());
    }
}
