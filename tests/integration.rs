use std::fs;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

fn lintweave_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lintweave"));
    // Run inside a scratch project so detection sees a clean environment.
    cmd.current_dir(dir.path());
    cmd.env_remove("VSCODE_PID");
    cmd.env_remove("JETBRAINS_IDE");
    cmd
}

fn parse_sequence(stdout: &[u8]) -> Vec<Value> {
    let parsed: Value = serde_json::from_slice(stdout).unwrap();
    parsed.as_array().unwrap().clone()
}

fn layer_names(sequence: &[Value]) -> Vec<String> {
    sequence
        .iter()
        .filter_map(|l| l.get("name"))
        .filter_map(|n| n.as_str())
        .map(|n| n.to_string())
        .collect()
}

#[test]
fn test_compose_outputs_json_sequence() {
    let dir = TempDir::new().unwrap();

    let output = lintweave_cmd(&dir).output().unwrap();

    assert!(output.status.success());
    let sequence = parse_sequence(&output.stdout);
    let names = layer_names(&sequence);
    assert_eq!(names.first().map(String::as_str), Some("lintweave:ignores"));
    assert_eq!(names.last().map(String::as_str), Some("lintweave:prettier"));
}

#[test]
fn test_no_test_flag_drops_test_layer() {
    let dir = TempDir::new().unwrap();

    let output = lintweave_cmd(&dir).arg("--no-test").output().unwrap();

    assert!(output.status.success());
    let names = layer_names(&parse_sequence(&output.stdout));
    assert!(!names.contains(&"lintweave:test".to_string()));
    assert!(names.contains(&"lintweave:yaml".to_string()));
}

#[test]
fn test_config_file_is_discovered_and_announced() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lintweave.toml"), "yaml = false\n").unwrap();

    let output = lintweave_cmd(&dir).output().unwrap();

    assert!(output.status.success());
    let names = layer_names(&parse_sequence(&output.stdout));
    assert!(!names.contains(&"lintweave:yaml".to_string()));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using config:"));
}

#[test]
fn test_quiet_suppresses_config_announcement() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lintweave.toml"), "yaml = false\n").unwrap();

    let output = lintweave_cmd(&dir).arg("--quiet").output().unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Using config:"));
}

#[test]
fn test_cli_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lintweave.toml"), "typescript = false\n").unwrap();

    let output = lintweave_cmd(&dir).arg("--typescript").output().unwrap();

    assert!(output.status.success());
    let names = layer_names(&parse_sequence(&output.stdout));
    assert!(names.contains(&"lintweave:typescript:rules".to_string()));
}

#[test]
fn test_broken_config_warns_and_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lintweave.toml"), "not valid {{{\n").unwrap();

    let output = lintweave_cmd(&dir).output().unwrap();

    // Composition still runs with defaults.
    assert!(output.status.success());
    let names = layer_names(&parse_sequence(&output.stdout));
    assert!(names.contains(&"lintweave:yaml".to_string()));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning: Failed to load"));
}

#[test]
fn test_gitignore_layer_synthesized_first_when_file_present() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gitignore"), "dist\ncoverage\n").unwrap();

    let output = lintweave_cmd(&dir).output().unwrap();

    assert!(output.status.success());
    let names = layer_names(&parse_sequence(&output.stdout));
    assert_eq!(
        names.first().map(String::as_str),
        Some("lintweave:gitignore")
    );
}

#[test]
fn test_init_creates_template() {
    let dir = TempDir::new().unwrap();

    let output = lintweave_cmd(&dir).arg("--init").output().unwrap();

    assert!(output.status.success());
    let content = fs::read_to_string(dir.path().join("lintweave.toml")).unwrap();
    assert!(content.contains("typescript"));

    // Second run refuses to overwrite.
    let output = lintweave_cmd(&dir).arg("--init").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_pretty_output_is_multiline() {
    let dir = TempDir::new().unwrap();

    let compact = lintweave_cmd(&dir).output().unwrap();
    let pretty = lintweave_cmd(&dir).arg("--pretty").output().unwrap();

    let compact_lines = compact.stdout.iter().filter(|b| **b == b'\n').count();
    let pretty_lines = pretty.stdout.iter().filter(|b| **b == b'\n').count();
    assert_eq!(compact_lines, 1);
    assert!(pretty_lines > 1);
}
