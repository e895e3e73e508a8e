use serde_json::json;

use crate::layer::{plugin_map, rule_map, Layer, RuleMap};
use crate::plugins::PluginHandle;

/// Base-language layer.
///
/// While a file is being edited interactively, unused-code reporting is
/// relaxed so half-written code does not light up; in batch/CI runs the
/// full severity applies.
pub(crate) fn javascript(in_editor: bool, overrides: Option<RuleMap>) -> Vec<Layer> {
    let mut rules = rule_map([
        ("constructor-super", json!("error")),
        ("eqeqeq", json!(["error", "smart"])),
        ("new-cap", json!(["error", { "capIsNew": false, "newIsCap": true }])),
        ("no-array-constructor", json!("error")),
        ("no-async-promise-executor", json!("error")),
        ("no-cond-assign", json!(["error", "always"])),
        (
            "no-console",
            json!(["error", { "allow": ["warn", "error"] }]),
        ),
        ("no-debugger", json!("error")),
        ("no-fallthrough", json!("error")),
        ("no-irregular-whitespace", json!("error")),
        (
            "no-restricted-syntax",
            json!([
                "error",
                "DebuggerStatement",
                "LabeledStatement",
                "WithStatement"
            ]),
        ),
        ("no-self-compare", json!("error")),
        ("no-unsafe-finally", json!("error")),
        // Unused code is reported by the unused-imports plugin below.
        ("no-unused-vars", json!("off")),
        ("no-var", json!("error")),
        ("object-shorthand", json!(["error", "always"])),
        (
            "prefer-const",
            json!(["error", { "destructuring": "all" }]),
        ),
        ("prefer-template", json!("error")),
        (
            "unused-imports/no-unused-imports",
            if in_editor { json!("off") } else { json!("error") },
        ),
        (
            "unused-imports/no-unused-vars",
            json!([
                "warn",
                { "args": "after-used", "argsIgnorePattern": "^_", "varsIgnorePattern": "^_" }
            ]),
        ),
    ]);
    if let Some(extra) = overrides {
        rules.extend(extra);
    }

    vec![Layer {
        name: Some("lintweave:javascript".into()),
        plugins: Some(plugin_map([(
            "unused-imports",
            PluginHandle::new("eslint-plugin-unused-imports"),
        )])),
        language_options: Some(json!({
            "ecmaVersion": 2022,
            "sourceType": "module",
        })),
        linter_options: Some(json!({ "reportUnusedDisableDirectives": true })),
        rules: Some(rules),
        ..Layer::default()
    }]
}
