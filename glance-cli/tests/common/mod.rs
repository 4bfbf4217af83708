//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary configuration directory
//! - Command builder helpers for common patterns
//! - Item description fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated configuration directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the glance configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The configuration directory is not created; glance creates it on
    /// first load.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("glance-config");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// `GLANCE_CONFIG_DIR` is cleared so the caller's environment cannot leak
    /// into the test.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("glance").expect("Failed to find glance binary");
        cmd.env_remove("GLANCE_CONFIG_DIR");
        cmd.env_remove("GLANCE_LOG_MODE");
        cmd
    }

    /// Get a command builder with the configuration directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("glance.yaml")
    }

    /// Path of the configuration backup.
    pub fn backup_file(&self) -> PathBuf {
        self.config_dir.join("backup").join("glance.yaml")
    }

    /// Write the configuration file directly.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.config_dir).expect("Failed to create config dir");
        std::fs::write(self.config_file(), contents).expect("Failed to write config");
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Read the value of an option via `glance config get`.
    pub fn get_option(&self, path: &str) -> String {
        let output = self
            .command()
            .arg("--quiet")
            .args(["config", "get", path])
            .output()
            .expect("Failed to run config get");

        assert!(
            output.status.success(),
            "config get failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }
}

/// A chest holding two stacks of apples and one of bread.
#[allow(dead_code)]
pub const CHEST_ITEM: &str = r#"{
  "id": "minecraft:chest",
  "kind": {"type": "block", "block": "chest"},
  "data": {"BlockEntityTag": {"Items": [
    {"Slot": 0, "id": "minecraft:apple", "Count": 3},
    {"Slot": 5, "id": "minecraft:apple", "Count": 2},
    {"Slot": 9, "id": "minecraft:bread", "Count": 1}
  ]}}
}"#;

/// Bread, which is food and nothing else.
#[allow(dead_code)]
pub const BREAD_ITEM: &str = r#"{
  "id": "minecraft:bread",
  "food": {"hunger": 5, "saturation_modifier": 0.6}
}"#;
