//! Environment detection oracles
//!
//! The engine never reads process-global state directly; everything it
//! wants to know about the environment comes through [`EnvProbe`], read
//! exactly once per composition by the feature selector.

use std::env;
use std::fs;
use std::path::PathBuf;

/// Read-only environment signals consumed by the feature selector.
pub trait EnvProbe {
    /// An interactive-editor marker is present.
    fn editor_marker(&self) -> bool;

    /// A continuous-integration marker is present.
    fn ci_marker(&self) -> bool;

    /// The named package is installed in the current project.
    fn package_installed(&self, name: &str) -> bool;

    /// A `.gitignore` file is present at the project root.
    fn has_gitignore(&self) -> bool;
}

/// Probe backed by the real process environment and filesystem.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    root: PathBuf,
}

impl SystemProbe {
    pub fn new(root: PathBuf) -> Self {
        SystemProbe { root }
    }

    /// Probe rooted at the current working directory.
    pub fn current() -> Self {
        SystemProbe::new(env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    fn manifest_lists(&self, name: &str) -> bool {
        let manifest = self.root.join("package.json");
        let Ok(content) = fs::read_to_string(manifest) else {
            return false;
        };
        let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&content) else {
            return false;
        };

        ["dependencies", "devDependencies"]
            .iter()
            .any(|section| parsed.get(section).and_then(|deps| deps.get(name)).is_some())
    }
}

impl EnvProbe for SystemProbe {
    fn editor_marker(&self) -> bool {
        env::var_os("VSCODE_PID").is_some() || env::var_os("JETBRAINS_IDE").is_some()
    }

    fn ci_marker(&self) -> bool {
        env::var_os("CI").is_some()
    }

    fn package_installed(&self, name: &str) -> bool {
        self.root.join("node_modules").join(name).is_dir() || self.manifest_lists(name)
    }

    fn has_gitignore(&self) -> bool {
        self.root.join(".gitignore").is_file()
    }
}

/// Fixed-answer probe for tests and embedders with their own detection.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    pub editor: bool,
    pub ci: bool,
    pub packages: Vec<String>,
    pub gitignore: bool,
}

impl EnvProbe for StaticProbe {
    fn editor_marker(&self) -> bool {
        self.editor
    }

    fn ci_marker(&self) -> bool {
        self.ci
    }

    fn package_installed(&self, name: &str) -> bool {
        self.packages.iter().any(|p| p == name)
    }

    fn has_gitignore(&self) -> bool {
        self.gitignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_package_installed_via_node_modules() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/typescript")).unwrap();

        let probe = SystemProbe::new(dir.path().to_path_buf());
        assert!(probe.package_installed("typescript"));
        assert!(!probe.package_installed("vue"));
    }

    #[test]
    fn test_package_installed_via_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "devDependencies": { "vue": "^3.0.0" } }"#,
        )
        .unwrap();

        let probe = SystemProbe::new(dir.path().to_path_buf());
        assert!(probe.package_installed("vue"));
        assert!(!probe.package_installed("react"));
    }

    #[test]
    fn test_has_gitignore() {
        let dir = TempDir::new().unwrap();
        let probe = SystemProbe::new(dir.path().to_path_buf());
        assert!(!probe.has_gitignore());

        fs::write(dir.path().join(".gitignore"), "dist\n").unwrap();
        assert!(probe.has_gitignore());
    }

    #[test]
    fn test_static_probe_answers() {
        let probe = StaticProbe {
            editor: true,
            packages: vec!["typescript".into()],
            ..StaticProbe::default()
        };

        assert!(probe.editor_marker());
        assert!(!probe.ci_marker());
        assert!(probe.package_installed("typescript"));
        assert!(!probe.package_installed("nuxt"));
    }
}
