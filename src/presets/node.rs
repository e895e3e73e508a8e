use serde_json::json;

use crate::layer::{plugin_map, rule_map, Layer};
use crate::plugins::PluginHandle;

/// Runtime-API layer.
pub(crate) fn node() -> Vec<Layer> {
    vec![Layer {
        name: Some("lintweave:node".into()),
        plugins: Some(plugin_map([("node", PluginHandle::new("eslint-plugin-n"))])),
        rules: Some(rule_map([
            ("node/handle-callback-err", json!(["error", "^(err|error)$"])),
            ("node/no-deprecated-api", json!("error")),
            ("node/no-exports-assign", json!("error")),
            ("node/no-new-require", json!("error")),
            ("node/no-path-concat", json!("error")),
            ("node/prefer-global/buffer", json!(["error", "never"])),
            ("node/prefer-global/process", json!("off")),
            ("node/process-exit-as-throw", json!("error")),
        ])),
        ..Layer::default()
    }]
}
