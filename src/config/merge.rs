//! Configuration merging logic
//!
//! Priority: CLI flags > lintweave.toml > defaults

use crate::options::{ComposeOptions, Toggle};

/// CLI toggles that can override config file settings.
///
/// Uses `Option<T>` to distinguish "not specified" from "explicitly set".
/// Default-on concerns are disabled through the inverted `no_*` flags.
#[derive(Debug, Default)]
pub struct CliToggleOptions {
    pub typescript: Option<bool>,
    pub vue: Option<bool>,
    pub react: Option<bool>,
    /// If Some(true), drop the gitignore-derived layer
    pub no_gitignore: Option<bool>,
    /// If Some(true), drop the test layer
    pub no_test: Option<bool>,
    /// If Some(true), drop the JSON-like and manifest-sort layers
    pub no_jsonc: Option<bool>,
    /// If Some(true), drop the YAML layer
    pub no_yaml: Option<bool>,
    /// If Some(true), drop the markdown layer
    pub no_markdown: Option<bool>,
    /// If Some(true), drop the formatting re-application layer
    pub no_prettier: Option<bool>,
}

/// Merge toggle settings from CLI and config file.
///
/// Priority: CLI > TOML > defaults. Unset fields stay unset so the
/// selector's own detection and defaults still apply.
pub fn merge_compose_options(
    cli: &CliToggleOptions,
    file: Option<ComposeOptions>,
) -> ComposeOptions {
    let mut options = file.unwrap_or_default();

    if let Some(enable) = cli.typescript {
        options.typescript = Some(Toggle::Flag(enable));
    }
    if let Some(enable) = cli.vue {
        options.vue = Some(enable);
    }
    if let Some(enable) = cli.react {
        options.react = Some(enable);
    }
    if cli.no_gitignore.unwrap_or(false) {
        options.gitignore = Some(Toggle::Flag(false));
    }
    if cli.no_test.unwrap_or(false) {
        options.test = Some(false);
    }
    if cli.no_jsonc.unwrap_or(false) {
        options.jsonc = Some(false);
    }
    if cli.no_yaml.unwrap_or(false) {
        options.yaml = Some(false);
    }
    if cli.no_markdown.unwrap_or(false) {
        options.markdown = Some(false);
    }
    if cli.no_prettier.unwrap_or(false) {
        options.prettier = Some(false);
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_defaults_only() {
        let cli = CliToggleOptions::default();
        let options = merge_compose_options(&cli, None);

        assert_eq!(options.typescript, None);
        assert_eq!(options.vue, None);
        assert_eq!(options.test, None);
    }

    #[test]
    fn test_merge_file_settings_survive() {
        let cli = CliToggleOptions::default();
        let file = ComposeOptions {
            vue: Some(true),
            yaml: Some(false),
            ..ComposeOptions::default()
        };

        let options = merge_compose_options(&cli, Some(file));

        assert_eq!(options.vue, Some(true));
        assert_eq!(options.yaml, Some(false));
    }

    #[test]
    fn test_merge_cli_overrides_file() {
        let cli = CliToggleOptions {
            typescript: Some(true),
            no_test: Some(true),
            ..CliToggleOptions::default()
        };
        let file = ComposeOptions {
            typescript: Some(Toggle::Flag(false)),
            test: Some(true),
            ..ComposeOptions::default()
        };

        let options = merge_compose_options(&cli, Some(file));

        assert_eq!(options.typescript, Some(Toggle::Flag(true))); // CLI wins
        assert_eq!(options.test, Some(false)); // no_test inverted
    }

    #[test]
    fn test_merge_keeps_typescript_table_when_cli_silent() {
        let cli = CliToggleOptions::default();
        let file = ComposeOptions {
            typescript: Some(Toggle::Options(crate::options::TypescriptOptions {
                tsconfig_path: Some("tsconfig.json".into()),
            })),
            ..ComposeOptions::default()
        };

        let options = merge_compose_options(&cli, Some(file));

        let ts = Toggle::options(&options.typescript).unwrap();
        assert_eq!(ts.tsconfig_path.as_deref(), Some("tsconfig.json"));
    }
}
