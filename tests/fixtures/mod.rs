//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the hueforge binary built for this test run.
pub fn hueforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_hueforge")
}

/// Creates a Command with an isolated config directory.
///
/// Pass in a config directory path to share it between multiple commands
/// in the same test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(hueforge_bin());
    cmd.env("HUEFORGE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    run_in(args, config_dir.path())
}

/// Runs the binary with the given config directory.
pub fn run_in(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Asserts exit code 0, printing stderr otherwise.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr(output)
    );
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!("stdout is not JSON ({e}): {}", stdout(output));
    })
}

/// Writes `content` to `name` inside `dir` and returns the path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// A small catalog with one active and one inactive template.
pub const TEST_CATALOG: &str = r##"[
  {
    "id": "fixture-active",
    "name": "Fixture Active",
    "name_ar": "نشط",
    "category": "bold",
    "difficulty_level": "advanced",
    "color_palette": {
      "primary": "#112233", "secondary": "#445566", "accent": "#778899",
      "neutral": "#ffffff", "dark": "#000000"
    },
    "theme_config": { "layout": { "spacing": "tight" } },
    "popularity_score": 10
  },
  {
    "id": "fixture-hidden",
    "name": "Fixture Hidden",
    "name_ar": "مخفي",
    "category": "bold",
    "difficulty_level": "beginner",
    "color_palette": {
      "primary": "#aa0000", "secondary": "#00aa00", "accent": "#0000aa",
      "neutral": "#ffffff", "dark": "#000000"
    },
    "is_active": false,
    "popularity_score": 99
  }
]"##;
