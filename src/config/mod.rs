//! Configuration file support for lintweave.
//!
//! This module provides:
//! - Loading composition options from `lintweave.toml`
//! - Config file discovery (search upward from current directory)
//! - Merging CLI flags, config file, and defaults
//! - Template generation with `--init`

mod file;
mod init;
mod merge;

pub use file::{find_config_file, find_file_upward, load_options, ConfigError};
pub use init::{generate_init_file, generate_init_file_in, LINTWEAVE_TOML_TEMPLATE};
pub use merge::{merge_compose_options, CliToggleOptions};
