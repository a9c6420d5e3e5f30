use std::collections::{BTreeSet, HashMap};

use stylesniffer_core::{BuiltinStyle, has_consistent_names};

#[test]
fn builtin_variant_spellings_unique_across_styles() {
    let mut seen: HashMap<&'static str, BuiltinStyle> = HashMap::new();

    for builtin in BuiltinStyle::ALL {
        let style = builtin.style();
        assert!(
            has_consistent_names(style),
            "inconsistent names for {:?}: {:?}",
            builtin,
            style.variant_names()
        );

        for variant in style.variant_names() {
            if let Some(prev) = seen.insert(variant, builtin) {
                panic!("duplicate variant spelling {variant:?}: {prev:?} and {builtin:?}");
            }
        }
    }
}

#[test]
fn builtin_variant_catalogue_is_exact() {
    let expected: [(BuiltinStyle, &[&str]); 5] = [
        (BuiltinStyle::Pascal, &["PascalCase", "UpperCamelCase", "CamelCase"]),
        (BuiltinStyle::LowerCamel, &["camelCase", "LowerCamelCase"]),
        (BuiltinStyle::Snake, &["snake_case"]),
        (BuiltinStyle::ScreamingSnake, &["SCREAMING_SNAKE_CASE"]),
        (
            BuiltinStyle::Kebab,
            &[
                "Kebab Case",
                "caterpillar-case",
                "param-case",
                "dash-case",
                "hyphen-case",
                "lisp-case",
                "spinal-case",
                "css-case",
            ],
        ),
    ];

    for (builtin, variants) in expected {
        let expected: BTreeSet<&str> = variants.iter().copied().collect();
        assert_eq!(builtin.style().variant_names(), expected, "variant catalogue drift for {builtin:?}");
        assert_eq!(builtin.style().canonical_name(), variants[0]);
    }
}

#[test]
fn builtin_styles_are_pairwise_disjoint_on_samples() {
    let samples = [
        "someCamelCase",
        "camel",
        "SomePascalCase",
        "HTTPServer",
        "snake_case_input",
        "_private",
        "SCREAMING_SNAKE_CASE",
        "some-kebab-case",
    ];

    for sample in samples {
        let accepted: Vec<BuiltinStyle> = BuiltinStyle::ALL
            .into_iter()
            .filter(|b| b.style().classify(sample))
            .collect();
        assert_eq!(accepted.len(), 1, "{sample:?} accepted by {accepted:?}");
    }
}
