//! The case style traits.
//!
//! A case style is a naming convention (e.g. `snake_case`) made of two parts:
//! - naming metadata ([`NamedStyle`]): a canonical name plus accepted variant spellings, and
//! - a classification predicate ([`CaseStyle::classify`]).
//!
//! ## Notes
//! - Identity is **name-based**: two styles are equal iff their canonical names are equal, regardless of their
//!   concrete type. `PartialEq`/`Eq`/`Hash` are implemented for `dyn CaseStyle` on that basis, and [`StyleRef`]
//!   inherits them.
//! - Styles are stateless, so a single instance is shared freely across threads.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Naming metadata of a case style.
///
/// Usually generated with `#[derive(CaseStyleInfo)]`.
pub trait NamedStyle {
    /// Return the unique, human-readable name of this style (e.g. `"camelCase"`).
    fn canonical_name(&self) -> &'static str;

    /// Return every accepted spelling for this style.
    ///
    /// ## Notes
    /// - The set is never empty and always contains [`NamedStyle::canonical_name`].
    /// - By default only the canonical name is returned.
    fn variant_names(&self) -> BTreeSet<&'static str> {
        BTreeSet::from([self.canonical_name()])
    }
}

/// A naming convention that can classify identifiers.
pub trait CaseStyle: NamedStyle + Send + Sync {
    /// Check whether `input` is written in this style.
    ///
    /// ## Notes
    /// - Pure and total: never panics, never allocates state between calls.
    /// - The input is taken verbatim (no trimming).
    fn classify(&self, input: &str) -> bool;
}

/// Shared handle to a case style instance.
pub type StyleRef = Arc<dyn CaseStyle>;

impl PartialEq for dyn CaseStyle {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_name() == other.canonical_name()
    }
}

impl Eq for dyn CaseStyle {}

impl Hash for dyn CaseStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_name().hash(state);
    }
}

impl fmt::Debug for dyn CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseStyle")
            .field("name", &self.canonical_name())
            .field("variants", &self.variant_names())
            .finish()
    }
}

impl fmt::Display for dyn CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Check the naming invariants of a style.
///
/// ## Returns
/// - `true` if the canonical name is not blank and the variant set contains it.
///
/// ## Examples
/// ```rust
/// use stylesniffer_core::{has_consistent_names, KebabCaseStyle};
///
/// assert!(has_consistent_names(&KebabCaseStyle));
/// ```
pub fn has_consistent_names<S: NamedStyle + ?Sized>(style: &S) -> bool {
    let name = style.canonical_name();
    !name.trim().is_empty() && style.variant_names().contains(name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct Plain;

    impl NamedStyle for Plain {
        fn canonical_name(&self) -> &'static str {
            "plain"
        }
    }

    impl CaseStyle for Plain {
        fn classify(&self, input: &str) -> bool {
            !input.is_empty()
        }
    }

    struct PlainImpostor;

    impl NamedStyle for PlainImpostor {
        fn canonical_name(&self) -> &'static str {
            "plain"
        }

        fn variant_names(&self) -> BTreeSet<&'static str> {
            BTreeSet::from(["plain", "simple"])
        }
    }

    impl CaseStyle for PlainImpostor {
        fn classify(&self, _input: &str) -> bool {
            false
        }
    }

    struct Detached;

    impl NamedStyle for Detached {
        fn canonical_name(&self) -> &'static str {
            "detached"
        }

        fn variant_names(&self) -> BTreeSet<&'static str> {
            BTreeSet::from(["something-else"])
        }
    }

    struct Blank;

    impl NamedStyle for Blank {
        fn canonical_name(&self) -> &'static str {
            "  "
        }
    }

    #[test]
    fn test_default_variant_names_is_the_canonical_name() {
        assert_eq!(Plain.variant_names(), BTreeSet::from(["plain"]));
    }

    #[test]
    fn test_equality_is_name_based() {
        let a: StyleRef = Arc::new(Plain);
        let b: StyleRef = Arc::new(Plain);
        let impostor: StyleRef = Arc::new(PlainImpostor);

        assert!(a == b);
        assert!(a == impostor);
    }

    #[test]
    fn test_different_names_are_not_equal() {
        let a: StyleRef = Arc::new(Plain);
        let b: StyleRef = Arc::new(crate::SnakeCaseStyle);
        assert!(a != b);
    }

    #[test]
    fn test_hash_is_name_based() {
        let mut set: HashSet<StyleRef> = HashSet::new();
        set.insert(Arc::new(Plain));
        set.insert(Arc::new(PlainImpostor));
        set.insert(Arc::new(crate::SnakeCaseStyle));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_and_debug() {
        let style: StyleRef = Arc::new(Plain);
        assert_eq!(style.to_string(), "plain");
        assert_eq!(format!("{style:?}"), r#"CaseStyle { name: "plain", variants: {"plain"} }"#);
    }

    #[test]
    fn test_has_consistent_names() {
        assert!(has_consistent_names(&Plain));
        assert!(has_consistent_names(&PlainImpostor));
        assert!(!has_consistent_names(&Detached));
        assert!(!has_consistent_names(&Blank));
    }
}
