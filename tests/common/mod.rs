//! Shared testing utilities for provkit CLI and library tests.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every constant-group config key, in aggregation order.
pub const GROUP_KEYS: [&str; 8] = [
    "license_classes",
    "custom_license_classes",
    "language_groups",
    "task_groups",
    "domain_groups",
    "model_groups",
    "creator_groups",
    "formats",
];

/// Testing harness providing an isolated working directory.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `provkit` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("provkit").expect("Failed to locate provkit binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn write_json(&self, relative: &str, value: &Value) -> PathBuf {
        self.write(relative, &value.to_string())
    }

    /// Write one JSON file per constant group under `constants/`, each holding
    /// `{"group": "<key>"}`.
    pub fn write_constant_groups(&self) {
        for key in GROUP_KEYS {
            self.write_json(
                &format!("constants/{key}.json"),
                &serde_json::json!({ "group": key }),
            );
        }
    }

    /// Write `provkit.toml` pointing at `constants/` and, optionally, a summary directory.
    pub fn write_config(&self, summary_dir: Option<&str>) -> PathBuf {
        let mut content = String::from("[constants]\n");
        for key in GROUP_KEYS {
            content.push_str(&format!("{key} = \"constants/{key}.json\"\n"));
        }
        if let Some(dir) = summary_dir {
            content.push_str(&format!("\n[summaries]\ndirectory = \"{dir}\"\n"));
        }
        self.write("provkit.toml", &content)
    }

    pub fn read_json(&self, relative: &str) -> Value {
        let content =
            fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read output");
        serde_json::from_str(&content).expect("Output is not valid JSON")
    }
}
