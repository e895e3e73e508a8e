pub mod colors;
pub mod config;
pub mod detect;
pub mod globs;

mod combine;
mod error;
mod factory;
mod layer;
mod options;
mod plugins;
mod presets;
mod resolve;
mod select;

pub use colors::{should_use_colors, Colors};
pub use combine::combine;
pub use config::{
    find_config_file, find_file_upward, generate_init_file, load_options, merge_compose_options,
    CliToggleOptions, ConfigError, LINTWEAVE_TOML_TEMPLATE,
};
pub use detect::{EnvProbe, StaticProbe, SystemProbe};
pub use error::ComposeError;
pub use factory::{compose, compose_with};
pub use layer::{plugin_map, rule_map, Layer, RuleMap};
pub use options::{ComposeOptions, GitignoreOptions, Overrides, Toggle, TypescriptOptions};
pub use plugins::{ModuleLoader, PluginHandle, StaticRegistry};
pub use select::Concern;
