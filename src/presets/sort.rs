//! "Sort well-known manifest files" layers, appended with the JSON-like
//! layer. Key order in these files is convention, so it is enforced.

use std::sync::Arc;

use serde_json::json;

use crate::error::ComposeError;
use crate::layer::{rule_map, Layer};
use crate::plugins::ModuleLoader;

pub(crate) async fn sort_package_json(
    loader: Arc<dyn ModuleLoader>,
) -> Result<Vec<Layer>, ComposeError> {
    let parser = loader.load("jsonc-eslint-parser").await?;

    Ok(vec![Layer {
        name: Some("lintweave:sort-package-json".into()),
        files: Some(vec!["**/package.json".to_string()]),
        language_options: Some(json!({ "parser": parser.module() })),
        rules: Some(rule_map([(
            "jsonc/sort-keys",
            json!([
                "error",
                {
                    "order": [
                        "name", "version", "private", "packageManager", "description",
                        "type", "license", "homepage", "repository", "bugs", "keywords",
                        "exports", "main", "module", "types", "bin", "files", "engines",
                        "scripts", "peerDependencies", "dependencies", "devDependencies"
                    ],
                    "pathPattern": "^$"
                },
                {
                    "order": { "type": "asc" },
                    "pathPattern": "^(?:dev|peer|optional|bundled)?[Dd]ependencies$"
                }
            ]),
        )])),
        ..Layer::default()
    }])
}

pub(crate) async fn sort_tsconfig(
    loader: Arc<dyn ModuleLoader>,
) -> Result<Vec<Layer>, ComposeError> {
    let parser = loader.load("jsonc-eslint-parser").await?;

    Ok(vec![Layer {
        name: Some("lintweave:sort-tsconfig".into()),
        files: Some(vec![
            "**/tsconfig.json".to_string(),
            "**/tsconfig.*.json".to_string(),
        ]),
        language_options: Some(json!({ "parser": parser.module() })),
        rules: Some(rule_map([(
            "jsonc/sort-keys",
            json!([
                "error",
                {
                    "order": ["extends", "compilerOptions", "references", "files", "include", "exclude"],
                    "pathPattern": "^$"
                },
                {
                    "order": { "type": "asc" },
                    "pathPattern": "^compilerOptions$"
                }
            ]),
        )])),
        ..Layer::default()
    }])
}
