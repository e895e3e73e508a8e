use std::sync::Arc;

use serde_json::json;

use crate::error::ComposeError;
use crate::globs::{GLOB_MARKDOWN, GLOB_SRC_EXT};
use crate::layer::{plugin_map, rule_map, Layer, RuleMap};
use crate::plugins::ModuleLoader;

/// Markdown layer.
///
/// Fenced code blocks are linted as their own virtual files, including
/// blocks written in any registered component extension, with rules that
/// make no sense for documentation snippets switched off.
pub(crate) async fn markdown(
    loader: Arc<dyn ModuleLoader>,
    component_exts: Vec<String>,
    overrides: Option<RuleMap>,
) -> Result<Vec<Layer>, ComposeError> {
    let plugin = loader.load("eslint-plugin-markdown").await?;

    let mut embedded = vec![format!("**/*.md/**/*.{GLOB_SRC_EXT}")];
    embedded.extend(
        component_exts
            .iter()
            .map(|ext| format!("**/*.md/**/*.{ext}")),
    );

    let mut rules = rule_map([
        ("import/no-unresolved", json!("off")),
        ("no-alert", json!("off")),
        ("no-console", json!("off")),
        ("no-undef", json!("off")),
        ("no-unused-expressions", json!("off")),
        ("no-unused-vars", json!("off")),
        ("node/prefer-global/process", json!("off")),
        ("@typescript-eslint/no-require-imports", json!("off")),
        ("@typescript-eslint/no-unused-vars", json!("off")),
        ("@typescript-eslint/no-use-before-define", json!("off")),
        ("unused-imports/no-unused-imports", json!("off")),
        ("unused-imports/no-unused-vars", json!("off")),
    ]);
    if let Some(extra) = overrides {
        rules.extend(extra);
    }

    Ok(vec![
        Layer {
            name: Some("lintweave:markdown:setup".into()),
            files: Some(vec![GLOB_MARKDOWN.to_string()]),
            plugins: Some(plugin_map([("markdown", plugin)])),
            processor: Some("markdown/markdown".into()),
            ..Layer::default()
        },
        Layer {
            name: Some("lintweave:markdown:code-blocks".into()),
            files: Some(embedded),
            rules: Some(rules),
            ..Layer::default()
        },
    ])
}
