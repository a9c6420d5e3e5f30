//! Derive macros for stylesniffer case styles.
//!
//! These macros generate the naming boilerplate every case style carries:
//! - `CaseStyleInfo`: Generates the `NamedStyle` implementation (canonical name + variant catalogue)
//!   from a `#[case_style(...)]` attribute
//!
//! The classification logic itself (`CaseStyle::classify`) is always written by hand.

use std::collections::BTreeSet;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Expr, ExprArray, ExprLit, Lit, LitStr};

/// Generates the `NamedStyle` implementation for a case style.
///
/// The canonical name is always part of the generated variant set, so it must not be repeated in
/// `variants`. Blank names and duplicate variants are rejected at compile time.
///
/// # Example
/// ```ignore
/// #[derive(Default, CaseStyleInfo)]
/// #[case_style(name = "PascalCase", variants = ["UpperCamelCase", "CamelCase"])]
/// struct PascalCaseStyle;
///
/// // Generates:
/// impl stylesniffer_core::NamedStyle for PascalCaseStyle {
///     fn canonical_name(&self) -> &'static str { "PascalCase" }
///     fn variant_names(&self) -> BTreeSet<&'static str> {
///         BTreeSet::from(["PascalCase", "UpperCamelCase", "CamelCase"])
///     }
/// }
/// ```
#[proc_macro_derive(CaseStyleInfo, attributes(case_style))]
pub fn derive_case_style_info(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_case_style_info(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

/// Parsed content of every `#[case_style(...)]` attribute on an item.
struct CaseStyleAttrs {
    name: LitStr,
    variants: Vec<LitStr>,
}

fn expand_case_style_info(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let attrs = parse_case_style_attrs(input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let name = &attrs.name;
    let variants = &attrs.variants;

    Ok(quote! {
        impl #impl_generics ::stylesniffer_core::NamedStyle for #ident #ty_generics #where_clause {
            fn canonical_name(&self) -> &'static str {
                #name
            }

            fn variant_names(&self) -> ::std::collections::BTreeSet<&'static str> {
                ::std::collections::BTreeSet::from([#name #(, #variants)*])
            }
        }
    })
}

fn parse_case_style_attrs(input: &DeriveInput) -> syn::Result<CaseStyleAttrs> {
    let mut name: Option<LitStr> = None;
    let mut variants: Vec<LitStr> = Vec::new();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("case_style")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                if name.is_some() {
                    return Err(meta.error("duplicate `name` in #[case_style(...)]"));
                }
                name = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("variants") {
                let array: ExprArray = meta.value()?.parse()?;
                for elem in array.elems {
                    match elem {
                        Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) => variants.push(lit),
                        other => {
                            return Err(syn::Error::new_spanned(other, "case style variants must be string literals"));
                        }
                    }
                }
                Ok(())
            } else {
                Err(meta.error("unsupported #[case_style(...)] key, expected `name` or `variants`"))
            }
        })?;
    }

    let Some(name) = name else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "missing #[case_style(name = \"...\")] attribute",
        ));
    };
    if name.value().trim().is_empty() {
        return Err(syn::Error::new_spanned(&name, "case style name must not be blank"));
    }

    let mut seen = BTreeSet::from([name.value()]);
    for variant in &variants {
        if variant.value().trim().is_empty() {
            return Err(syn::Error::new_spanned(variant, "case style variant must not be blank"));
        }
        if !seen.insert(variant.value()) {
            return Err(syn::Error::new_spanned(
                variant,
                format!(
                    "duplicate case style variant `{}` (the canonical name is always included)",
                    variant.value()
                ),
            ));
        }
    }

    Ok(CaseStyleAttrs { name, variants })
}
