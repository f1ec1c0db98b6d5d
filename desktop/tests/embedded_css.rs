#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) stays present & non‑trivial.
//!
//! The desktop launcher embeds `ui/assets/theme/main.css` with `include_str!`,
//! so a truncated or moved file would only show up as unstyled charts at
//! runtime. If you relocate the theme, update both this test and the constant
//! in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--color-brand", "body {", ".value-chart__tooltip"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
