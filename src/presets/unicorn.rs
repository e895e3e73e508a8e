use serde_json::json;

use crate::layer::{plugin_map, rule_map, Layer};
use crate::plugins::PluginHandle;

/// Naming/style layer.
pub(crate) fn unicorn() -> Vec<Layer> {
    vec![Layer {
        name: Some("lintweave:unicorn".into()),
        plugins: Some(plugin_map([(
            "unicorn",
            PluginHandle::new("eslint-plugin-unicorn"),
        )])),
        rules: Some(rule_map([
            ("unicorn/error-message", json!("error")),
            ("unicorn/escape-case", json!("error")),
            ("unicorn/no-instanceof-array", json!("error")),
            ("unicorn/no-new-array", json!("error")),
            ("unicorn/no-new-buffer", json!("error")),
            ("unicorn/number-literal-case", json!("error")),
            ("unicorn/prefer-dom-node-text-content", json!("error")),
            ("unicorn/prefer-includes", json!("error")),
            ("unicorn/prefer-node-protocol", json!("error")),
            ("unicorn/prefer-number-properties", json!("error")),
            ("unicorn/prefer-string-starts-ends-with", json!("error")),
            ("unicorn/prefer-type-error", json!("error")),
            ("unicorn/throw-new-error", json!("error")),
        ])),
        ..Layer::default()
    }]
}
