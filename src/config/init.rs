//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Template lintweave.toml with documentation
pub const LINTWEAVE_TOML_TEMPLATE: &str = r#"# lintweave.toml - Layer composition options
# https://github.com/lintweave/lintweave
#
# lintweave always composes the base layers:
# ignores, javascript, comments, node, jsdoc, imports, unicorn,
# perfectionist and prettier.
#
# The settings below control the optional layers - uncomment and modify
# as needed.

# Derive an ignore layer from .gitignore when the file exists.
# Default: true
# gitignore = true

# Type-system layer. Defaults to package detection; set explicitly, or
# give it a table with tsconfig_path for type-aware rules.
# typescript = true
#
# [typescript]
# tsconfig_path = "tsconfig.json"

# Component-framework layers. vue defaults to marker-package detection;
# react is explicit opt-in.
# vue = true
# react = false

# Layers enabled by default - set to false to drop one.
# test = true
# jsonc = true
# yaml = true
# markdown = true
# prettier = true

# Per-concern rule overrides, merged last into that concern's layer.
# Overrides for a disabled concern are ignored.
# [overrides.vue]
# "vue/html-indent" = "off"

# Raw pass-through fields become one final, highest-precedence layer.
# [rules]
# "no-console" = "off"
"#;

/// Generate lintweave.toml in the specified directory (or current
/// directory if None).
///
/// Returns an error if lintweave.toml already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(|| PathBuf::from("lintweave.toml"), |d| d.join("lintweave.toml"));

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "lintweave.toml already exists",
        ));
    }

    fs::write(&path, LINTWEAVE_TOML_TEMPLATE)?;
    Ok(path)
}

/// Generate lintweave.toml in the current directory.
///
/// Returns an error if lintweave.toml already exists.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ComposeOptions;
    use tempfile::TempDir;

    #[test]
    fn test_generate_init_file_creates_file() {
        let dir = TempDir::new().unwrap();

        let result = generate_init_file_in(Some(dir.path()));
        assert!(result.is_ok());

        let path = result.unwrap();
        assert!(path.exists());
        assert_eq!(path, dir.path().join("lintweave.toml"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("typescript"));
        assert!(content.contains("overrides"));
    }

    #[test]
    fn test_generate_init_file_fails_if_exists() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("lintweave.toml");

        // Create existing file
        fs::write(&config_path, "existing").unwrap();

        let result = generate_init_file_in(Some(dir.path()));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_template_is_valid_toml() {
        // Verify the template can be parsed
        let parsed: Result<ComposeOptions, _> = toml::from_str(LINTWEAVE_TOML_TEMPLATE);
        assert!(parsed.is_ok());
    }
}
