//! Integration tests for the llm-manager CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, version output and the `get` shortcut.

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;

/// Test that the binary run without arguments shows usage and fails.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("llm-manager").expect("Failed to find llm-manager binary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("llm-manager").expect("Failed to find llm-manager binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("llm-manager"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the -v short flag also displays version information.
#[test]
fn test_cli_version_short_flag() {
    let mut cmd = Command::cargo_bin("llm-manager").expect("Failed to find llm-manager binary");

    cmd.arg("-v");

    cmd.assert().success().stdout(format!(
        "llm-manager version {}\n",
        env!("CARGO_PKG_VERSION")
    ));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("llm-manager").expect("Failed to find llm-manager binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Manage task-to-model mappings for local LLMs",
        ))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("show"));
}

/// Test that subcommand help is available.
#[test]
fn test_cli_set_help() {
    let mut cmd = Command::cargo_bin("llm-manager").expect("Failed to find llm-manager binary");

    cmd.args(["set", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<TASK>"))
        .stdout(predicate::str::contains("<MODEL>"));
}

/// A bare task name behaves exactly like `get`.
#[test]
fn test_bare_task_is_get() {
    let env = TestEnv::new();
    env.write_user("vision = llava\n");

    env.command()
        .arg("vision")
        .assert()
        .success()
        .stdout("llava\n");

    env.command()
        .arg("audio")
        .assert()
        .code(1)
        .stdout("audio is not set.\n");
}

/// Global options may come before the bare task name.
#[test]
fn test_bare_task_after_global_options() {
    let env = TestEnv::new();
    env.write_user("vision = llava\n");

    env.command()
        .arg("--quiet")
        .arg("--syntax")
        .arg("simple")
        .arg("vision")
        .assert()
        .success()
        .stdout("llava\n");
}

/// An unknown flag is rejected by the argument parser.
#[test]
fn test_unknown_flag_rejected() {
    let env = TestEnv::new();

    env.command()
        .arg("--frobnicate")
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--frobnicate"));
}

/// Completion scripts can be generated.
#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("llm-manager"));
}
