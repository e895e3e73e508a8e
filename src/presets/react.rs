use std::sync::Arc;

use serde_json::json;

use crate::error::ComposeError;
use crate::globs::{GLOB_JSX, GLOB_TSX};
use crate::layer::{plugin_map, rule_map, Layer, RuleMap};
use crate::plugins::ModuleLoader;

/// Component-framework layer, explicit opt-in.
pub(crate) async fn react(
    loader: Arc<dyn ModuleLoader>,
    typescript: bool,
    overrides: Option<RuleMap>,
) -> Result<Vec<Layer>, ComposeError> {
    let (plugin, hooks) = tokio::join!(
        loader.load("eslint-plugin-react"),
        loader.load("eslint-plugin-react-hooks")
    );
    let plugin = plugin?;
    let hooks = hooks?;

    let mut rules = rule_map([
        ("react/jsx-key", json!("error")),
        ("react/jsx-no-duplicate-props", json!("error")),
        (
            "react/jsx-no-undef",
            if typescript { json!("off") } else { json!("error") },
        ),
        ("react/no-children-prop", json!("error")),
        ("react/no-danger-with-children", json!("error")),
        ("react/no-deprecated", json!("error")),
        ("react/no-direct-mutation-state", json!("error")),
        ("react/no-find-dom-node", json!("error")),
        ("react/no-is-mounted", json!("error")),
        ("react/no-render-return-value", json!("error")),
        ("react/no-string-refs", json!("error")),
        ("react/no-unescaped-entities", json!("error")),
        ("react/no-unknown-property", json!("error")),
        ("react/prop-types", json!("off")),
        ("react/react-in-jsx-scope", json!("off")),
        ("react-hooks/exhaustive-deps", json!("warn")),
        ("react-hooks/rules-of-hooks", json!("error")),
    ]);
    if let Some(extra) = overrides {
        rules.extend(extra);
    }

    Ok(vec![
        Layer {
            name: Some("lintweave:react:setup".into()),
            plugins: Some(plugin_map([("react", plugin), ("react-hooks", hooks)])),
            ..Layer::default()
        },
        Layer {
            name: Some("lintweave:react:rules".into()),
            files: Some(vec![GLOB_JSX.to_string(), GLOB_TSX.to_string()]),
            language_options: Some(json!({
                "parserOptions": { "ecmaFeatures": { "jsx": true } },
            })),
            rules: Some(rules),
            ..Layer::default()
        },
    ])
}
