//! Config file discovery and loading

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::options::ComposeOptions;

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading the file
    Io(io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config file: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Search upward from `start_dir` for a file with the given name.
///
/// If `stop_at_git_root` is true, stops searching when a `.git` directory
/// is found. Returns `None` if the file is not found.
pub fn find_file_upward(
    start_dir: &Path,
    filename: &str,
    stop_at_git_root: bool,
) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if stop_at_git_root && current.join(".git").exists() {
            return None;
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find lintweave.toml by searching upward from the given directory.
///
/// Stops at the first `lintweave.toml` found, or at the git repository
/// root (directory containing `.git`), whichever comes first.
///
/// Returns `None` if no config file is found.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, "lintweave.toml", true)
}

/// Load and parse lintweave.toml from the given path.
pub fn load_options(path: &Path) -> Result<ComposeOptions, ConfigError> {
    let content = fs::read_to_string(path)?;
    let options: ComposeOptions = toml::from_str(&content)?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Toggle;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_current_dir() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("lintweave.toml");
        fs::write(&config_path, "test = false\n").unwrap();

        let found = find_config_file(dir.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let parent = TempDir::new().unwrap();
        let config_path = parent.path().join("lintweave.toml");
        fs::write(&config_path, "test = false\n").unwrap();

        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();

        let found = find_config_file(&child);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = TempDir::new().unwrap();
        // Create .git directory to mark git root
        fs::create_dir(dir.path().join(".git")).unwrap();

        let subdir = dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();

        // No config in this tree
        let found = find_config_file(&subdir);
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_options_full() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("lintweave.toml");
        fs::write(
            &config_path,
            r#"
vue = true
test = false

[typescript]
tsconfig_path = "tsconfig.json"

[overrides.prettier]
"prettier/prettier" = "warn"
"#,
        )
        .unwrap();

        let options = load_options(&config_path).unwrap();
        assert_eq!(options.vue, Some(true));
        assert_eq!(options.test, Some(false));
        let ts = Toggle::options(&options.typescript).unwrap();
        assert_eq!(ts.tsconfig_path.as_deref(), Some("tsconfig.json"));
        assert!(options.overrides.prettier.is_some());
    }

    #[test]
    fn test_load_options_empty() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("lintweave.toml");
        fs::write(&config_path, "").unwrap();

        let options = load_options(&config_path).unwrap();
        assert_eq!(options.vue, None);
        assert_eq!(options.test, None);
    }

    #[test]
    fn test_load_options_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("lintweave.toml");
        fs::write(&config_path, "invalid toml {{{\n").unwrap();

        let result = load_options(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
