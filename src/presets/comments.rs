use serde_json::json;

use crate::layer::{plugin_map, rule_map, Layer};
use crate::plugins::PluginHandle;

/// Commenting-convention layer: directive comments stay honest.
pub(crate) fn comments() -> Vec<Layer> {
    vec![Layer {
        name: Some("lintweave:comments".into()),
        plugins: Some(plugin_map([(
            "eslint-comments",
            PluginHandle::new("eslint-plugin-eslint-comments"),
        )])),
        rules: Some(rule_map([
            ("eslint-comments/no-aggregating-enable", json!("error")),
            ("eslint-comments/no-duplicate-disable", json!("error")),
            ("eslint-comments/no-unlimited-disable", json!("error")),
            ("eslint-comments/no-unused-enable", json!("error")),
        ])),
        ..Layer::default()
    }]
}
