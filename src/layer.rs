//! Flat-config layer data model

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::plugins::PluginHandle;

/// Rule identifier to severity/options value, ordered for stable output.
pub type RuleMap = BTreeMap<String, Value>;

/// One named bundle of file matchers, plugin bindings, and rule settings.
///
/// A layer is fully resolved by the time it exists: plugin values are
/// handles, never pending loads. Layers are not mutated after creation;
/// anything that looks like an override is a later layer in the sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Glob patterns this layer applies to (absent = default matched types)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Exclusion patterns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignores: Option<Vec<String>>,

    /// Short plugin alias to resolved module handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<BTreeMap<String, PluginHandle>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,

    /// Opaque parser/interpreter settings, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linter_options: Option<Value>,

    /// Processor identifier, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

impl Layer {
    /// Empty layer carrying only a name.
    pub fn named(name: &str) -> Self {
        Layer {
            name: Some(name.to_string()),
            ..Layer::default()
        }
    }
}

/// Build a rule map from `(rule, value)` pairs.
pub fn rule_map<'a, I>(entries: I) -> RuleMap
where
    I: IntoIterator<Item = (&'a str, Value)>,
{
    entries
        .into_iter()
        .map(|(rule, value)| (rule.to_string(), value))
        .collect()
}

/// Build a plugin binding map from `(alias, module)` pairs.
pub fn plugin_map<'a, I>(entries: I) -> BTreeMap<String, PluginHandle>
where
    I: IntoIterator<Item = (&'a str, PluginHandle)>,
{
    entries
        .into_iter()
        .map(|(alias, handle)| (alias.to_string(), handle))
        .collect()
}
