//! Discovery adapter: the table of case styles available when a registry is built.
//!
//! Styles are listed explicitly with [`register_case_styles!`]. Each entry is a [`StyleDescriptor`]: the style's
//! identity plus a constructor. Listing a type that is not a `CaseStyle + Default` is a compile error, so the only
//! failure left at runtime is a constructor body that faults, surfaced as
//! [`StyleSnifferError::Instantiation`].
//!
//! ## Examples
//! ```rust
//! use stylesniffer::register_case_styles;
//! use stylesniffer_core::{KebabCaseStyle, SnakeCaseStyle};
//!
//! let descriptors = register_case_styles![SnakeCaseStyle, KebabCaseStyle];
//! assert_eq!(descriptors.len(), 2);
//! assert!(descriptors[0].type_name().ends_with("SnakeCaseStyle"));
//! ```

use std::sync::Arc;

use stylesniffer_core::{
    BuiltinStyle, CaseStyle, KebabCaseStyle, LowerCamelCaseStyle, PascalCaseStyle, ScreamingSnakeCaseStyle,
    SnakeCaseStyle, StyleRef,
};

use crate::error::{BoxError, Result, StyleSnifferError};

/// Constructor of a discovered case style.
pub type StyleConstructor = fn() -> std::result::Result<StyleRef, BoxError>;

/// A constructible case style, as supplied by discovery.
#[derive(Debug, Clone, Copy)]
pub struct StyleDescriptor {
    type_name: &'static str,
    construct: StyleConstructor,
}

impl StyleDescriptor {
    /// Describe a style built with `T::default()`.
    pub fn of<T: CaseStyle + Default + 'static>() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            construct: construct_default::<T>,
        }
    }

    /// Describe a style whose constructor may fail.
    pub const fn fallible(type_name: &'static str, construct: StyleConstructor) -> Self {
        Self { type_name, construct }
    }

    /// Identity of the described style (its type name).
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Run the constructor.
    ///
    /// ## Errors
    /// - [`StyleSnifferError::Instantiation`] carrying this descriptor's identity and the constructor's error.
    pub fn instantiate(&self) -> Result<StyleRef> {
        (self.construct)().map_err(|source| StyleSnifferError::Instantiation {
            descriptor: self.type_name,
            source,
        })
    }
}

fn construct_default<T: CaseStyle + Default + 'static>() -> std::result::Result<StyleRef, BoxError> {
    Ok(Arc::new(T::default()))
}

/// Build a `Vec<StyleDescriptor>` from a list of case style types.
///
/// Order matters: it becomes the registration order, which decides ambiguous classifications.
#[macro_export]
macro_rules! register_case_styles {
    ($($style:ty),* $(,)?) => {
        ::std::vec![$($crate::discovery::StyleDescriptor::of::<$style>()),*]
    };
}

/// Descriptor of a built-in case style.
fn builtin_descriptor(builtin: BuiltinStyle) -> StyleDescriptor {
    match builtin {
        BuiltinStyle::Pascal => StyleDescriptor::of::<PascalCaseStyle>(),
        BuiltinStyle::LowerCamel => StyleDescriptor::of::<LowerCamelCaseStyle>(),
        BuiltinStyle::Snake => StyleDescriptor::of::<SnakeCaseStyle>(),
        BuiltinStyle::ScreamingSnake => StyleDescriptor::of::<ScreamingSnakeCaseStyle>(),
        BuiltinStyle::Kebab => StyleDescriptor::of::<KebabCaseStyle>(),
    }
}

/// Return the descriptors of every built-in case style, in [`BuiltinStyle::ALL`] order.
pub fn discovered_case_styles() -> Vec<StyleDescriptor> {
    BuiltinStyle::ALL.into_iter().map(builtin_descriptor).collect()
}
