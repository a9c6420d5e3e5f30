//! Style registry: the ordered catalogue of known case styles and the lookups over it.
//!
//! ## Notes
//! - Insertion order is preserved and duplicates by name are kept. Every lookup returns the **first** match in
//!   registration order, so registration order is the tie-break for ambiguous input.
//! - Query input is sanitized before use (trimmed; `None`/empty/whitespace-only yields `None`). Classification
//!   itself never trims.
//! - The style list is copy-on-write: cloning a registry is cheap and produces an immutable snapshot that later
//!   registrations never touch.
//!
//! ## Examples
//! ```rust
//! use stylesniffer::StyleRegistry;
//!
//! let registry = StyleRegistry::with_defaults().unwrap();
//! let style = registry.find_by_classification("snake_case_input").unwrap();
//! assert_eq!(style.canonical_name(), "snake_case");
//!
//! let pascal = registry.find_by_name_or_variant("UpperCamelCase").unwrap();
//! assert_eq!(pascal.canonical_name(), "PascalCase");
//! assert!(registry.find_by_classification("   ").is_none());
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use stylesniffer_core::{StyleRef, has_consistent_names};

use crate::discovery::{StyleDescriptor, discovered_case_styles};
use crate::error::{Result, StyleSnifferError};

/// Trim `input` and discard it when nothing is left.
///
/// ## Notes
/// - Every char up to and including U+0020 is trimmed, control chars included. Non-ASCII whitespace such as
///   U+00A0 is kept and left for the styles to reject.
///
/// ## Examples
/// ```rust
/// use stylesniffer::sanitize_input;
///
/// assert_eq!(sanitize_input(Some("  camelCase ")), Some("camelCase"));
/// assert_eq!(sanitize_input(Some(" \t")), None);
/// assert_eq!(sanitize_input(None), None);
/// ```
pub fn sanitize_input(input: Option<&str>) -> Option<&str> {
    input.map(|s| s.trim_matches(|c: char| c <= ' ')).filter(|s| !s.is_empty())
}

/// Ordered collection of case styles.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: Arc<Vec<StyleRef>>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every discovered built-in style.
    ///
    /// ## Errors
    /// - [`StyleSnifferError::Instantiation`] if a discovered style cannot be constructed.
    pub fn with_defaults() -> Result<Self> {
        Self::from_descriptors(&discovered_case_styles())
    }

    /// Create a registry from discovery descriptors, failing on the first constructor fault.
    ///
    /// ## Errors
    /// - [`StyleSnifferError::Instantiation`] for the first descriptor that cannot be constructed. Nothing is
    ///   registered in that case.
    #[tracing::instrument(skip_all, fields(descriptor_count = descriptors.len()))]
    pub fn from_descriptors(descriptors: &[StyleDescriptor]) -> Result<Self> {
        let styles = descriptors
            .iter()
            .map(StyleDescriptor::instantiate)
            .collect::<Result<Vec<_>>>()?;

        let mut registry = Self::new();
        registry.register(styles);
        Ok(registry)
    }

    /// Register every descriptor that can be constructed.
    ///
    /// ## Returns
    /// - The instantiation errors of the descriptors that were skipped, in input order. The caller decides whether
    ///   to propagate them.
    #[tracing::instrument(skip_all, fields(descriptor_count = descriptors.len()))]
    pub fn register_descriptors(&mut self, descriptors: &[StyleDescriptor]) -> Vec<StyleSnifferError> {
        let mut styles = Vec::with_capacity(descriptors.len());
        let mut failures = Vec::new();
        for descriptor in descriptors {
            match descriptor.instantiate() {
                Ok(style) => styles.push(style),
                Err(err) => failures.push(err),
            }
        }
        self.register(styles);
        failures
    }

    /// Append a single style.
    ///
    /// ## Returns
    /// - `true` if the style was registered, `false` if it was skipped (see [`StyleRegistry::register`]).
    pub fn register_style(&mut self, style: StyleRef) -> bool {
        self.register([style]) == 1
    }

    /// Append styles in order.
    ///
    /// Styles with a blank canonical name, or whose variant names don't include the canonical name, are skipped
    /// with a warning.
    ///
    /// ## Returns
    /// - The number of styles actually registered.
    pub fn register<I>(&mut self, styles: I) -> usize
    where
        I: IntoIterator<Item = StyleRef>,
    {
        // Validate the whole batch before touching the list, so a panicking iterator leaves it unchanged.
        let accepted: Vec<StyleRef> = styles
            .into_iter()
            .filter(|style| {
                let consistent = has_consistent_names(style.as_ref());
                if !consistent {
                    tracing::warn!(
                        name = style.canonical_name(),
                        variants = ?style.variant_names(),
                        "skipping case style with inconsistent names"
                    );
                }
                consistent
            })
            .collect();
        if accepted.is_empty() {
            return 0;
        }

        let list = Arc::make_mut(&mut self.styles);
        for (offset, style) in accepted.iter().enumerate() {
            tracing::debug!(name = style.canonical_name(), position = list.len() + offset, "registered case style");
        }
        let count = accepted.len();
        list.extend(accepted);
        count
    }

    /// Find the first style that classifies `input`.
    ///
    /// ## Parameters
    /// - `input`: identifier to classify; surrounding whitespace is ignored.
    ///
    /// ## Returns
    /// - `None` for missing/blank input or when no registered style accepts it.
    pub fn find_by_classification<'a>(&self, input: impl Into<Option<&'a str>>) -> Option<StyleRef> {
        let input = sanitize_input(input.into())?;
        let found = self.styles.iter().find(|style| style.classify(input)).cloned();
        tracing::trace!(input, style = found.as_ref().map(|s| s.canonical_name()), "classified");
        found
    }

    /// Find the first style whose canonical name or variant names contain `token`.
    ///
    /// ## Notes
    /// - Pure name lookup: nothing is classified. Matching is case-sensitive.
    pub fn find_by_name_or_variant<'a>(&self, token: impl Into<Option<&'a str>>) -> Option<StyleRef> {
        let token = sanitize_input(token.into())?;
        let found = self
            .styles
            .iter()
            .find(|style| style.canonical_name() == token || style.variant_names().contains(token))
            .cloned();
        tracing::trace!(token, style = found.as_ref().map(|s| s.canonical_name()), "resolved");
        found
    }

    /// Return the distinct canonical names of the registered styles.
    pub fn supported_names(&self) -> BTreeSet<&'static str> {
        self.styles.iter().map(|style| style.canonical_name()).collect()
    }

    /// Return every name and variant name the registered styles answer to.
    pub fn supported_names_including_variants(&self) -> BTreeSet<&'static str> {
        self.styles.iter().flat_map(|style| style.variant_names()).collect()
    }

    /// Registered styles, in registration order.
    pub fn styles(&self) -> &[StyleRef] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
