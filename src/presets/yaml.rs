use std::sync::Arc;

use serde_json::json;

use crate::error::ComposeError;
use crate::globs::GLOB_YAML;
use crate::layer::{plugin_map, rule_map, Layer, RuleMap};
use crate::plugins::ModuleLoader;

/// YAML structured-data layer.
pub(crate) async fn yaml(
    loader: Arc<dyn ModuleLoader>,
    overrides: Option<RuleMap>,
) -> Result<Vec<Layer>, ComposeError> {
    let (plugin, parser) = tokio::join!(
        loader.load("eslint-plugin-yml"),
        loader.load("yaml-eslint-parser")
    );
    let plugin = plugin?;
    let parser = parser?;

    let mut rules = rule_map([
        ("yml/block-mapping", json!("error")),
        ("yml/block-sequence", json!("error")),
        ("yml/no-empty-key", json!("error")),
        ("yml/no-empty-sequence-entry", json!("error")),
        ("yml/no-irregular-whitespace", json!("error")),
        ("yml/plain-scalar", json!("error")),
        ("yml/vue-custom-block/no-parsing-error", json!("error")),
    ]);
    if let Some(extra) = overrides {
        rules.extend(extra);
    }

    Ok(vec![Layer {
        name: Some("lintweave:yaml".into()),
        files: Some(vec![GLOB_YAML.to_string()]),
        plugins: Some(plugin_map([("yml", plugin)])),
        language_options: Some(json!({ "parser": parser.module() })),
        rules: Some(rules),
        ..Layer::default()
    }])
}
