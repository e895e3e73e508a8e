use std::sync::Arc;

use serde_json::json;

use crate::error::ComposeError;
use crate::globs::GLOB_VUE;
use crate::layer::{plugin_map, rule_map, Layer, RuleMap};
use crate::plugins::ModuleLoader;

/// Component-framework layer for single-file components.
pub(crate) async fn vue(
    loader: Arc<dyn ModuleLoader>,
    typescript: bool,
    overrides: Option<RuleMap>,
) -> Result<Vec<Layer>, ComposeError> {
    let (plugin, parser) = tokio::join!(
        loader.load("eslint-plugin-vue"),
        loader.load("vue-eslint-parser")
    );
    let plugin = plugin?;
    let parser = parser?;

    // Script blocks hand off to the type-system parser when that layer is
    // enabled.
    let script_parser = if typescript {
        json!(loader.load("@typescript-eslint/parser").await?.module())
    } else {
        json!(null)
    };

    let mut rules = rule_map([
        (
            "vue/block-order",
            json!(["error", { "order": ["script", "template", "style"] }]),
        ),
        (
            "vue/component-name-in-template-casing",
            json!(["error", "PascalCase"]),
        ),
        (
            "vue/component-options-name-casing",
            json!(["error", "PascalCase"]),
        ),
        ("vue/custom-event-name-casing", json!(["error", "camelCase"])),
        (
            "vue/define-macros-order",
            json!([
                "error",
                { "order": ["defineOptions", "defineProps", "defineEmits", "defineSlots"] }
            ]),
        ),
        ("vue/dot-notation", json!(["error", { "allowKeywords": true }])),
        ("vue/eqeqeq", json!(["error", "smart"])),
        (
            "vue/html-self-closing",
            json!([
                "error",
                {
                    "html": { "component": "always", "normal": "always", "void": "always" },
                    "math": "always",
                    "svg": "always"
                }
            ]),
        ),
        ("vue/max-attributes-per-line", json!("off")),
        ("vue/multi-word-component-names", json!("off")),
        ("vue/no-dupe-keys", json!("off")),
        ("vue/no-empty-pattern", json!("error")),
        ("vue/no-irregular-whitespace", json!("error")),
        ("vue/no-loss-of-precision", json!("error")),
        (
            "vue/no-restricted-syntax",
            json!([
                "error",
                "DebuggerStatement",
                "LabeledStatement",
                "WithStatement"
            ]),
        ),
        ("vue/no-restricted-v-bind", json!(["error", "/^v-/"])),
        ("vue/no-setup-props-reactivity-loss", json!("off")),
        ("vue/no-sparse-arrays", json!("error")),
        ("vue/no-unused-refs", json!("error")),
        ("vue/no-useless-v-bind", json!("error")),
        ("vue/no-v-html", json!("off")),
        (
            "vue/object-shorthand",
            json!([
                "error",
                "always",
                { "avoidQuotes": true, "ignoreConstructors": false }
            ]),
        ),
        ("vue/prefer-separate-static-class", json!("error")),
        ("vue/prefer-template", json!("error")),
        ("vue/prop-name-casing", json!(["error", "camelCase"])),
        ("vue/require-default-prop", json!("off")),
        ("vue/require-prop-types", json!("off")),
        ("node/prefer-global/process", json!("off")),
    ]);
    if let Some(extra) = overrides {
        rules.extend(extra);
    }

    Ok(vec![
        Layer {
            name: Some("lintweave:vue:setup".into()),
            plugins: Some(plugin_map([("vue", plugin)])),
            ..Layer::default()
        },
        Layer {
            name: Some("lintweave:vue:rules".into()),
            files: Some(vec![GLOB_VUE.to_string()]),
            language_options: Some(json!({
                "parser": parser.module(),
                "parserOptions": {
                    "ecmaFeatures": { "jsx": true },
                    "extraFileExtensions": [".vue"],
                    "parser": script_parser,
                    "sourceType": "module",
                },
            })),
            processor: Some("vue/.vue".into()),
            rules: Some(rules),
            ..Layer::default()
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::StaticRegistry;

    fn loader() -> Arc<dyn ModuleLoader> {
        Arc::new(StaticRegistry::new())
    }

    #[tokio::test]
    async fn test_script_parser_follows_typescript_flag() {
        let plain = vue(loader(), false, None).await.unwrap();
        let typed = vue(loader(), true, None).await.unwrap();

        let plain_lang = plain[1].language_options.as_ref().unwrap();
        let typed_lang = typed[1].language_options.as_ref().unwrap();
        assert_eq!(plain_lang["parserOptions"]["parser"], json!(null));
        assert_eq!(
            typed_lang["parserOptions"]["parser"],
            json!("@typescript-eslint/parser")
        );
    }

    #[tokio::test]
    async fn test_self_closing_style_is_enforced_here() {
        let layers = vue(loader(), false, None).await.unwrap();
        let rules = layers[1].rules.as_ref().unwrap();

        assert_eq!(rules["vue/html-self-closing"][0], json!("error"));
    }
}
