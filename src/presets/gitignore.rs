//! Gitignore-derived ignore layer
//!
//! Reads a gitignore-style file and re-expresses its patterns in the
//! consuming tool's ignore-glob dialect. The read happens at the
//! provider's suspension point; a missing or unreadable file is fatal,
//! because by the time this provider runs the layer is enabled.

use std::path::Path;

use crate::layer::Layer;

use crate::error::ComposeError;

pub(crate) async fn gitignore(path: &Path) -> Result<Vec<Layer>, ComposeError> {
    let content = tokio::fs::read_to_string(path).await?;

    Ok(vec![Layer {
        name: Some("lintweave:gitignore".into()),
        ignores: Some(convert_patterns(&content)),
        ..Layer::default()
    }])
}

/// Convert gitignore lines to ignore globs.
///
/// An unanchored pattern matches at any depth, so it gains a `**/`
/// prefix; every pattern also ignores its own contents via a `/**`
/// sibling. Negations keep their `!` on both produced globs.
fn convert_patterns(content: &str) -> Vec<String> {
    let mut globs = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (negated, pattern) = match line.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, line),
        };

        let pattern = pattern.strip_suffix('/').unwrap_or(pattern);
        let anchored = pattern.contains('/');
        let base = match pattern.strip_prefix('/') {
            Some(rest) => rest.to_string(),
            None if anchored => pattern.to_string(),
            None => format!("**/{pattern}"),
        };

        let prefix = if negated { "!" } else { "" };
        globs.push(format!("{prefix}{base}"));
        globs.push(format!("{prefix}{base}/**"));
    }

    globs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unanchored_patterns_match_any_depth() {
        let globs = convert_patterns("dist\n");
        assert_eq!(globs, vec!["**/dist", "**/dist/**"]);
    }

    #[test]
    fn test_anchored_and_directory_patterns() {
        let globs = convert_patterns("/coverage\nsrc/generated/\n");
        assert_eq!(
            globs,
            vec![
                "coverage",
                "coverage/**",
                "src/generated",
                "src/generated/**"
            ]
        );
    }

    #[test]
    fn test_comments_and_blanks_skipped_negations_kept() {
        let globs = convert_patterns("# build output\n\n!keep.txt\n");
        assert_eq!(globs, vec!["!**/keep.txt", "!**/keep.txt/**"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let result = gitignore(&dir.path().join(".gitignore")).await;

        assert!(matches!(result, Err(ComposeError::Io(_))));
    }

    #[tokio::test]
    async fn test_layer_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gitignore");
        fs::write(&path, "node_modules\ndist\n").unwrap();

        let layers = gitignore(&path).await.unwrap();
        let ignores = layers[0].ignores.as_ref().unwrap();
        assert!(ignores.contains(&"**/dist".to_string()));
    }
}
