//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with isolated configuration files
//! - Command builder helpers for common patterns
//! - File fixtures for both tiers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the host configuration into a test.
const ISOLATED_VARS: &[&str] = &[
    "LLM_MANAGER_USER_CONFIG",
    "LLM_MANAGER_SYSTEM_CONFIG",
    "LLM_MANAGER_SYNTAX",
    "LLM_MANAGER_LOG_MODE",
    "LLM_MANAGER_OUTPUT_FORMAT",
    "SUDO_USER",
    "XDG_CONFIG_HOME",
];

/// Test environment with isolated configuration files.
///
/// Both tier files live in a temporary directory; neither exists until a
/// test writes it or the binary creates it.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path used for the user tier
    pub user_config: PathBuf,
    /// Path used for the system tier
    pub system_config: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let user_config = temp_path.join("home/.config/llm-manager/llm.conf");
        let system_config = temp_path.join("etc/llm.conf");

        Self {
            temp_dir,
            temp_path,
            user_config,
            system_config,
        }
    }

    /// Get a bare command builder without pre-configured paths.
    ///
    /// Host environment variables are cleared and `HOME` points into the
    /// temporary directory, so the default user tier resolves to
    /// [`TestEnv::user_config`].
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("llm-manager").expect("Failed to find llm-manager binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.temp_path.join("home"));
        cmd
    }

    /// Get a command builder with both tier paths pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--user-config")
            .arg(&self.user_config)
            .arg("--system-config")
            .arg(&self.system_config);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write the user tier file, creating its directory.
    pub fn write_user(&self, content: &str) {
        write_file(&self.user_config, content);
    }

    /// Write the system tier file, creating its directory.
    pub fn write_system(&self, content: &str) {
        write_file(&self.system_config, content);
    }

    /// Current contents of the user tier file.
    pub fn read_user(&self) -> String {
        std::fs::read_to_string(&self.user_config).expect("Failed to read user config")
    }

    /// Run `set` and assert it succeeded.
    pub fn set(&self, task: &str, model: &str) {
        self.command()
            .arg("set")
            .arg(task)
            .arg(model)
            .assert()
            .success();
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create config directory");
    }
    std::fs::write(path, content).expect("Failed to write config file");
}
