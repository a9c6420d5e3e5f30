//! Conformance of every built-in case style, driven by the testkit.

use stylesniffer_core::{KebabCaseStyle, LowerCamelCaseStyle, PascalCaseStyle, ScreamingSnakeCaseStyle, SnakeCaseStyle};
use stylesniffer_testkit::case_style_conformance;

case_style_conformance!(
    lower_camel_case,
    LowerCamelCaseStyle,
    matching: ["someCamelCase", "shouldStartWithLowerCaseOtherwiseItsPascalCase", "camel"],
    non_matching: ["some_snake_case", "SomePascalCase", "some-kebab-case", "parseHTTP", ""],
);

case_style_conformance!(
    pascal_case,
    PascalCaseStyle,
    matching: ["SomePascalCase", "Pascal", "HTTPServer", "ALLCAPS"],
    non_matching: ["someCamelCase", "Some_Pascal", "Some-Pascal", "Some Pascal", "Some#Tag", ""],
);

case_style_conformance!(
    snake_case,
    SnakeCaseStyle,
    matching: ["snake_case_input", "another_input", "a_very_long_name_using_such_case_style"],
    non_matching: ["SomePascalCase", "someCamelCase", "some-kebab-case", "SOME_VALUE", "snake", ""],
);

case_style_conformance!(
    screaming_snake_case,
    ScreamingSnakeCaseStyle,
    matching: ["SCREAMING_WILL_NOT_MAKE_IT_BETTER", "SOME_VALUE", "FOO_BAR"],
    non_matching: [
        "SomePascalCase",
        "someCamelCase",
        "some-kebab-case",
        "some_snake_case",
        "Screaming_Snake_Case",
        "SCREAMING__SNAKE_CASE",
        "_SCREAMING_SNAKE_CASE",
        "SCREAMING_SNAKE_CASE_",
        "_FOO",
        "FOO_",
        "FOO__BAR",
    ],
);

case_style_conformance!(
    kebab_case,
    KebabCaseStyle,
    matching: ["some-kebab-case", "param-case", "a-b"],
    non_matching: ["Some-Kebab", "some-Kebab", "some_snake_case", "someCamelCase", "kebab", ""],
);
