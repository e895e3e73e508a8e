use serde_json::json;

use crate::layer::{plugin_map, rule_map, Layer};
use crate::plugins::PluginHandle;

/// Documentation-convention layer. Checks the shape of doc comments that
/// exist; it never requires them.
pub(crate) fn jsdoc() -> Vec<Layer> {
    vec![Layer {
        name: Some("lintweave:jsdoc".into()),
        plugins: Some(plugin_map([(
            "jsdoc",
            PluginHandle::new("eslint-plugin-jsdoc"),
        )])),
        rules: Some(rule_map([
            ("jsdoc/check-access", json!("warn")),
            ("jsdoc/check-param-names", json!("warn")),
            ("jsdoc/check-property-names", json!("warn")),
            ("jsdoc/check-types", json!("warn")),
            ("jsdoc/empty-tags", json!("warn")),
            ("jsdoc/implements-on-classes", json!("warn")),
            ("jsdoc/no-defaults", json!("warn")),
            ("jsdoc/no-multi-asterisks", json!("warn")),
            ("jsdoc/require-param-name", json!("warn")),
            ("jsdoc/require-property", json!("warn")),
            ("jsdoc/require-property-description", json!("warn")),
            ("jsdoc/require-property-name", json!("warn")),
            ("jsdoc/require-returns-check", json!("warn")),
            ("jsdoc/require-returns-description", json!("warn")),
            ("jsdoc/require-yields-check", json!("warn")),
        ])),
        ..Layer::default()
    }]
}
