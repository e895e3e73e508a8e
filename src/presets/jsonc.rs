use std::sync::Arc;

use serde_json::json;

use crate::error::ComposeError;
use crate::globs::{GLOB_JSON, GLOB_JSON5, GLOB_JSONC};
use crate::layer::{plugin_map, rule_map, Layer, RuleMap};
use crate::plugins::ModuleLoader;

/// JSON-like structured-data layer.
pub(crate) async fn jsonc(
    loader: Arc<dyn ModuleLoader>,
    overrides: Option<RuleMap>,
) -> Result<Vec<Layer>, ComposeError> {
    let (plugin, parser) = tokio::join!(
        loader.load("eslint-plugin-jsonc"),
        loader.load("jsonc-eslint-parser")
    );
    let plugin = plugin?;
    let parser = parser?;

    let mut rules = rule_map([
        ("jsonc/no-bigint-literals", json!("error")),
        ("jsonc/no-binary-expression", json!("error")),
        ("jsonc/no-binary-numeric-literals", json!("error")),
        ("jsonc/no-dupe-keys", json!("error")),
        ("jsonc/no-escape-sequence-in-identifier", json!("error")),
        ("jsonc/no-number-props", json!("error")),
        ("jsonc/no-octal-numeric-literals", json!("error")),
        ("jsonc/no-parenthesized", json!("error")),
        ("jsonc/no-plus-sign", json!("error")),
        ("jsonc/no-regexp-literals", json!("error")),
        ("jsonc/no-sparse-arrays", json!("error")),
        ("jsonc/no-template-literals", json!("error")),
        ("jsonc/no-undefined-value", json!("error")),
        ("jsonc/no-unicode-codepoint-escapes", json!("error")),
        ("jsonc/valid-json-number", json!("error")),
    ]);
    if let Some(extra) = overrides {
        rules.extend(extra);
    }

    Ok(vec![Layer {
        name: Some("lintweave:jsonc".into()),
        files: Some(vec![
            GLOB_JSON.to_string(),
            GLOB_JSON5.to_string(),
            GLOB_JSONC.to_string(),
        ]),
        plugins: Some(plugin_map([("jsonc", plugin)])),
        language_options: Some(json!({ "parser": parser.module() })),
        rules: Some(rules),
        ..Layer::default()
    }])
}
