//! Caller-facing composition options
//!
//! The options object is the single input to [`compose`](crate::compose):
//! one explicit field per recognized toggle, an `overrides` section of
//! per-concern rule fragments, and the raw pass-through fields that become
//! the final escape-hatch layer. Unknown keys are ignored.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::layer::RuleMap;

/// A toggle that is either a plain on/off flag or carries sub-options.
///
/// Absent (`None` on the options field) means "unset": the selector falls
/// back to environment detection or the concern's default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Toggle<T> {
    Flag(bool),
    Options(T),
}

impl<T> Toggle<T> {
    /// Enabled state, with `unset` used when the toggle is absent.
    pub fn enabled(toggle: &Option<Self>, unset: bool) -> bool {
        match toggle {
            None => unset,
            Some(Toggle::Flag(flag)) => *flag,
            Some(Toggle::Options(_)) => true,
        }
    }

    /// Sub-options, if the toggle was given as a table.
    pub fn options(toggle: &Option<Self>) -> Option<&T> {
        match toggle {
            Some(Toggle::Options(opts)) => Some(opts),
            _ => None,
        }
    }
}

/// Sub-options for the type-system layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TypescriptOptions {
    /// Enables type-aware rules when pointing at a tsconfig file
    pub tsconfig_path: Option<String>,
}

/// Sub-options for the gitignore-derived layer.
///
/// Supplying a table (even an empty one) skips the file-presence oracle:
/// the file named here is required to exist.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GitignoreOptions {
    /// Ignore file to read (default `.gitignore`)
    pub path: Option<PathBuf>,
}

/// Per-concern rule-setting fragments merged last into that concern's layer.
///
/// A fragment for a disabled concern is silently unused.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Overrides {
    pub javascript: Option<RuleMap>,
    pub typescript: Option<RuleMap>,
    pub test: Option<RuleMap>,
    pub vue: Option<RuleMap>,
    pub react: Option<RuleMap>,
    pub jsonc: Option<RuleMap>,
    pub yaml: Option<RuleMap>,
    pub markdown: Option<RuleMap>,
    pub prettier: Option<RuleMap>,
}

/// The full options object accepted by [`compose`](crate::compose).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposeOptions {
    /// Gitignore-derived ignore layer (default on, gated on file presence)
    pub gitignore: Option<Toggle<GitignoreOptions>>,

    /// Type-system layer (unset = enabled when the package is installed)
    pub typescript: Option<Toggle<TypescriptOptions>>,

    /// Component-framework layer, detected via marker packages when unset
    pub vue: Option<bool>,

    /// Component-framework layer, explicit opt-in only
    pub react: Option<bool>,

    /// Test layer (default on)
    pub test: Option<bool>,

    /// JSON-like layer plus manifest-sorting layers (default on)
    pub jsonc: Option<bool>,

    /// YAML layer (default on)
    pub yaml: Option<bool>,

    /// Markdown layer (default on)
    pub markdown: Option<bool>,

    /// Formatting-integration layer re-application (default on)
    pub prettier: Option<bool>,

    #[serde(default)]
    pub overrides: Overrides,

    // Raw pass-through fields, projected into one final layer when present.
    pub files: Option<Vec<String>>,
    pub ignores: Option<Vec<String>>,
    pub language_options: Option<Value>,
    pub linter_options: Option<Value>,
    pub processor: Option<String>,
    pub plugins: Option<BTreeMap<String, String>>,
    pub rules: Option<RuleMap>,
    pub settings: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flag_from_toml() {
        let options: ComposeOptions = toml::from_str("typescript = true\nvue = false\n").unwrap();

        assert_eq!(options.typescript, Some(Toggle::Flag(true)));
        assert_eq!(options.vue, Some(false));
        assert_eq!(options.react, None);
    }

    #[test]
    fn test_toggle_table_from_toml() {
        let options: ComposeOptions =
            toml::from_str("[typescript]\ntsconfig_path = \"tsconfig.json\"\n").unwrap();

        let ts = Toggle::options(&options.typescript).unwrap();
        assert_eq!(ts.tsconfig_path.as_deref(), Some("tsconfig.json"));
        assert!(Toggle::enabled(&options.typescript, false));
    }

    #[test]
    fn test_toggle_enabled_fallback() {
        let unset: Option<Toggle<TypescriptOptions>> = None;
        assert!(Toggle::enabled(&unset, true));
        assert!(!Toggle::enabled(&unset, false));

        let off = Some(Toggle::<TypescriptOptions>::Flag(false));
        assert!(!Toggle::enabled(&off, true));
    }

    #[test]
    fn test_overrides_fragments_from_toml() {
        let options: ComposeOptions =
            toml::from_str("[overrides.vue]\n\"vue/html-indent\" = \"off\"\n").unwrap();

        let vue = options.overrides.vue.unwrap();
        assert_eq!(vue["vue/html-indent"], serde_json::json!("off"));
    }

    #[test]
    fn test_passthrough_rules_from_toml() {
        let options: ComposeOptions =
            toml::from_str("[rules]\n\"no-console\" = \"off\"\n").unwrap();

        let rules = options.rules.unwrap();
        assert_eq!(rules["no-console"], serde_json::json!("off"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let options: ComposeOptions =
            toml::from_str("unknown_toggle = true\ntest = false\n").unwrap();

        assert_eq!(options.test, Some(false));
    }
}
