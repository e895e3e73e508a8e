//! Plugin module handles and deferred loading

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ComposeError;

/// Opaque handle to a resolved plugin module.
///
/// By the time a handle exists the module is loaded; layers never carry
/// pending values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginHandle {
    module: String,
}

impl PluginHandle {
    pub fn new(module: &str) -> Self {
        PluginHandle {
            module: module.to_string(),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }
}

/// Deferred module resolution for presets whose plugins load on demand.
///
/// A load failure for an enabled layer is fatal to the whole composition;
/// layers are never silently skipped.
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    async fn load(&self, module: &str) -> Result<PluginHandle, ComposeError>;
}

/// Plugin modules this crate knows how to bind.
const KNOWN_MODULES: &[&str] = &[
    "eslint-plugin-antfu",
    "eslint-plugin-eslint-comments",
    "eslint-plugin-import",
    "eslint-plugin-jsdoc",
    "eslint-plugin-jsonc",
    "eslint-plugin-markdown",
    "eslint-plugin-n",
    "eslint-plugin-no-only-tests",
    "eslint-plugin-perfectionist",
    "eslint-plugin-prettier",
    "eslint-plugin-react",
    "eslint-plugin-react-hooks",
    "eslint-plugin-unicorn",
    "eslint-plugin-unused-imports",
    "eslint-plugin-vitest",
    "eslint-plugin-vue",
    "eslint-plugin-yml",
    "@typescript-eslint/eslint-plugin",
    "@typescript-eslint/parser",
    "jsonc-eslint-parser",
    "vue-eslint-parser",
    "yaml-eslint-parser",
];

/// Loader backed by the fixed module table above.
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    known: &'static [&'static str],
}

impl StaticRegistry {
    pub fn new() -> Self {
        StaticRegistry {
            known: KNOWN_MODULES,
        }
    }
}

impl Default for StaticRegistry {
    fn default() -> Self {
        StaticRegistry::new()
    }
}

#[async_trait]
impl ModuleLoader for StaticRegistry {
    async fn load(&self, module: &str) -> Result<PluginHandle, ComposeError> {
        if self.known.contains(&module) {
            Ok(PluginHandle::new(module))
        } else {
            Err(ComposeError::ModuleLoad {
                module: module.to_string(),
                reason: "module is not in the bundled registry".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registry_loads_known_module() {
        let registry = StaticRegistry::new();
        let handle = registry.load("eslint-plugin-vue").await.unwrap();

        assert_eq!(handle.module(), "eslint-plugin-vue");
    }

    #[tokio::test]
    async fn test_registry_rejects_unknown_module() {
        let registry = StaticRegistry::new();
        let result = registry.load("eslint-plugin-missing").await;

        assert!(matches!(
            result,
            Err(ComposeError::ModuleLoad { module, .. }) if module == "eslint-plugin-missing"
        ));
    }
}
