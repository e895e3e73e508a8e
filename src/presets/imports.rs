use serde_json::json;

use crate::layer::{plugin_map, rule_map, Layer};
use crate::plugins::PluginHandle;

/// Import-hygiene layer.
pub(crate) fn imports() -> Vec<Layer> {
    vec![Layer {
        name: Some("lintweave:imports".into()),
        plugins: Some(plugin_map([
            ("antfu", PluginHandle::new("eslint-plugin-antfu")),
            ("import", PluginHandle::new("eslint-plugin-import")),
        ])),
        rules: Some(rule_map([
            ("antfu/import-dedupe", json!("error")),
            ("antfu/no-import-node-modules-by-path", json!("error")),
            ("import/first", json!("error")),
            (
                "import/newline-after-import",
                json!(["error", { "considerComments": true, "count": 1 }]),
            ),
            ("import/no-duplicates", json!("error")),
            ("import/no-mutable-exports", json!("error")),
            ("import/no-named-default", json!("error")),
            ("import/no-self-import", json!("error")),
            ("import/no-webpack-loader-syntax", json!("error")),
            ("import/order", json!("error")),
        ])),
        ..Layer::default()
    }]
}
