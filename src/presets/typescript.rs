use std::sync::Arc;

use serde_json::json;

use crate::error::ComposeError;
use crate::globs::GLOB_SRC;
use crate::layer::{plugin_map, rule_map, Layer, RuleMap};
use crate::plugins::ModuleLoader;

pub(crate) struct TypescriptParams {
    /// Extra component extensions (e.g. `vue`) whose files this layer
    /// should also cover
    pub component_exts: Vec<String>,
    /// Enables type-aware rules when pointing at a tsconfig file
    pub tsconfig_path: Option<String>,
    pub overrides: Option<RuleMap>,
}

/// Type-system layer. Parser and plugin load on demand.
pub(crate) async fn typescript(
    loader: Arc<dyn ModuleLoader>,
    params: TypescriptParams,
) -> Result<Vec<Layer>, ComposeError> {
    let (plugin, parser) = tokio::join!(
        loader.load("@typescript-eslint/eslint-plugin"),
        loader.load("@typescript-eslint/parser")
    );
    let plugin = plugin?;
    let parser = parser?;

    let mut files = vec![GLOB_SRC.to_string()];
    files.extend(
        params
            .component_exts
            .iter()
            .map(|ext| format!("**/*.{ext}")),
    );

    let extra_extensions: Vec<String> = params
        .component_exts
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect();

    let mut parser_options = json!({
        "extraFileExtensions": extra_extensions,
        "sourceType": "module",
    });
    if let Some(path) = &params.tsconfig_path {
        parser_options["project"] = json!([path]);
        parser_options["tsconfigRootDir"] = json!(".");
    }

    let mut rules = rule_map([
        (
            "@typescript-eslint/ban-ts-comment",
            json!(["error", { "ts-ignore": "allow-with-description" }]),
        ),
        (
            "@typescript-eslint/consistent-type-definitions",
            json!(["error", "interface"]),
        ),
        (
            "@typescript-eslint/consistent-type-imports",
            json!(["error", { "disallowTypeAnnotations": false, "prefer": "type-imports" }]),
        ),
        ("@typescript-eslint/no-dupe-class-members", json!("error")),
        ("@typescript-eslint/no-dynamic-delete", json!("off")),
        ("@typescript-eslint/no-explicit-any", json!("off")),
        ("@typescript-eslint/no-extraneous-class", json!("off")),
        ("@typescript-eslint/no-import-type-side-effects", json!("error")),
        ("@typescript-eslint/no-invalid-void-type", json!("off")),
        ("@typescript-eslint/no-non-null-assertion", json!("off")),
        ("@typescript-eslint/no-redeclare", json!("error")),
        ("@typescript-eslint/no-require-imports", json!("error")),
        (
            "@typescript-eslint/no-unused-vars",
            json!("off"),
        ),
        (
            "@typescript-eslint/no-use-before-define",
            json!(["error", { "classes": false, "functions": false, "variables": true }]),
        ),
        ("@typescript-eslint/prefer-ts-expect-error", json!("error")),
        // The base-language copies mis-handle TS constructs.
        ("no-dupe-class-members", json!("off")),
        ("no-redeclare", json!("off")),
        ("no-use-before-define", json!("off")),
        ("no-useless-constructor", json!("off")),
    ]);

    if params.tsconfig_path.is_some() {
        rules.extend(rule_map([
            ("@typescript-eslint/await-thenable", json!("error")),
            ("@typescript-eslint/no-floating-promises", json!("error")),
            ("@typescript-eslint/no-for-in-array", json!("error")),
            ("@typescript-eslint/no-misused-promises", json!("error")),
            ("@typescript-eslint/no-unnecessary-type-assertion", json!("error")),
            ("@typescript-eslint/unbound-method", json!("error")),
        ]));
    }
    if let Some(extra) = params.overrides {
        rules.extend(extra);
    }

    Ok(vec![
        Layer {
            name: Some("lintweave:typescript:setup".into()),
            plugins: Some(plugin_map([("@typescript-eslint", plugin)])),
            ..Layer::default()
        },
        Layer {
            name: Some("lintweave:typescript:rules".into()),
            files: Some(files),
            language_options: Some(json!({
                "parser": parser.module(),
                "parserOptions": parser_options,
            })),
            rules: Some(rules),
            ..Layer::default()
        },
    ])
}
