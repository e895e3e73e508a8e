use serde_json::json;

use crate::layer::{plugin_map, Layer, RuleMap};
use crate::plugins::PluginHandle;

/// Stylistic rules the formatting tool owns. Everything here is switched
/// off so the formatter, not the linter, decides layout.
const DISABLED_BY_PRETTIER: &[&str] = &[
    "array-bracket-newline",
    "array-bracket-spacing",
    "arrow-parens",
    "arrow-spacing",
    "block-spacing",
    "brace-style",
    "comma-dangle",
    "comma-spacing",
    "comma-style",
    "computed-property-spacing",
    "dot-location",
    "eol-last",
    "func-call-spacing",
    "indent",
    "key-spacing",
    "keyword-spacing",
    "linebreak-style",
    "max-len",
    "no-extra-semi",
    "no-mixed-spaces-and-tabs",
    "no-multi-spaces",
    "no-multiple-empty-lines",
    "no-tabs",
    "no-trailing-spaces",
    "object-curly-newline",
    "object-curly-spacing",
    "operator-linebreak",
    "quote-props",
    "quotes",
    "semi",
    "semi-spacing",
    "space-before-blocks",
    "space-before-function-paren",
    "space-in-parens",
    "space-infix-ops",
    "space-unary-ops",
    "template-curly-spacing",
    "vue/array-bracket-spacing",
    "vue/arrow-spacing",
    "vue/block-spacing",
    "vue/brace-style",
    "vue/comma-dangle",
    "vue/comma-spacing",
    "vue/comma-style",
    "vue/dot-location",
    "vue/html-closing-bracket-newline",
    "vue/html-closing-bracket-spacing",
    "vue/html-end-tags",
    "vue/html-indent",
    "vue/html-quotes",
    "vue/html-self-closing",
    "vue/key-spacing",
    "vue/keyword-spacing",
    "vue/max-attributes-per-line",
    "vue/multiline-html-element-content-newline",
    "vue/mustache-interpolation-spacing",
    "vue/no-multi-spaces",
    "vue/no-spaces-around-equal-signs-in-attribute",
    "vue/object-curly-newline",
    "vue/object-curly-spacing",
    "vue/operator-linebreak",
    "vue/quote-props",
    "vue/space-in-parens",
    "vue/space-infix-ops",
    "vue/space-unary-ops",
    "vue/template-curly-spacing",
];

/// The formatter never touches template self-closing style, so the blanket
/// disablement above is wrong for this one rule. Kept as a single named
/// exception; re-verify against the upstream table when it changes.
const SELF_CLOSING_EXCEPTION: &str = "vue/html-self-closing";

/// Formatting-integration layer.
///
/// Appears twice in a default composition: once among the base layers and
/// once at the very end (with the caller's overrides) so it outranks any
/// framework layer that re-enabled a conflicting stylistic rule.
pub(crate) fn prettier(overrides: Option<RuleMap>) -> Vec<Layer> {
    let mut rules: RuleMap = DISABLED_BY_PRETTIER
        .iter()
        .filter(|rule| **rule != SELF_CLOSING_EXCEPTION)
        .map(|rule| (rule.to_string(), json!("off")))
        .collect();
    rules.insert("prettier/prettier".into(), json!("error"));
    if let Some(extra) = overrides {
        rules.extend(extra);
    }

    vec![Layer {
        name: Some("lintweave:prettier".into()),
        plugins: Some(plugin_map([(
            "prettier",
            PluginHandle::new("eslint-plugin-prettier"),
        )])),
        rules: Some(rules),
        ..Layer::default()
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::rule_map;

    #[test]
    fn test_exception_is_in_base_table_but_not_in_output() {
        // Both halves matter: if the upstream table ever drops the rule,
        // this assertion flags the exception for review.
        assert!(DISABLED_BY_PRETTIER.contains(&SELF_CLOSING_EXCEPTION));

        let layers = prettier(None);
        let rules = layers[0].rules.as_ref().unwrap();
        assert!(!rules.contains_key(SELF_CLOSING_EXCEPTION));
    }

    #[test]
    fn test_other_conflict_rules_are_disabled() {
        let layers = prettier(None);
        let rules = layers[0].rules.as_ref().unwrap();

        assert_eq!(rules["vue/max-attributes-per-line"], json!("off"));
        assert_eq!(rules["indent"], json!("off"));
        assert_eq!(rules["prettier/prettier"], json!("error"));
    }

    #[test]
    fn test_overrides_win_over_table_and_plugin_rules() {
        let overrides = rule_map([
            ("prettier/prettier", json!("warn")),
            ("semi", json!("error")),
        ]);
        let layers = prettier(Some(overrides));
        let rules = layers[0].rules.as_ref().unwrap();

        assert_eq!(rules["prettier/prettier"], json!("warn"));
        assert_eq!(rules["semi"], json!("error"));
    }
}
