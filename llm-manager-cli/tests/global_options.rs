//! Integration tests for global CLI options.
//!
//! These tests verify global flags and environment variables that affect
//! all commands, including:
//! - --verbose and --quiet
//! - --user-config and --system-config overrides
//! - Environment variable handling (LLM_MANAGER_USER_CONFIG, ...)
//! - Precedence rules (CLI flags > env vars > defaults)

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Verbosity
// ============================================================================

#[test]
fn test_verbose_reports_resolved_paths() {
    let env = TestEnv::new();

    env.command()
        .arg("--verbose")
        .arg("show")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG: user config:"))
        .stderr(predicate::str::contains("DEBUG: syntax: extended"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let env = TestEnv::new();
    env.write_user("garbage\nvision = llava\n");

    env.command()
        .arg("--quiet")
        .args(["get", "vision"])
        .assert()
        .success()
        .stdout("llava\n")
        .stderr("");
}

#[test]
fn test_log_mode_env() {
    let env = TestEnv::new();
    env.write_user("garbage\n");

    env.command()
        .env("LLM_MANAGER_LOG_MODE", "quiet")
        .arg("show")
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_verbose_wins_over_log_mode_env() {
    let env = TestEnv::new();

    env.command()
        .env("LLM_MANAGER_LOG_MODE", "quiet")
        .arg("--verbose")
        .arg("show")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG:"));
}

/// Global options are accepted after the subcommand as well.
#[test]
fn test_global_option_after_subcommand() {
    let env = TestEnv::new();

    env.command()
        .args(["show", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG:"));
}

// ============================================================================
// Path Overrides
// ============================================================================

#[test]
fn test_config_paths_from_env() {
    let env = TestEnv::new();
    env.write_system("chat = mistral\n");
    env.write_user("vision = llava\n");

    env.command_bare()
        .env("LLM_MANAGER_USER_CONFIG", &env.user_config)
        .env("LLM_MANAGER_SYSTEM_CONFIG", &env.system_config)
        .arg("show")
        .assert()
        .success()
        .stdout("chat = mistral\nvision = llava\n");
}

#[test]
fn test_flag_beats_env() {
    let env = TestEnv::new();
    let other = env.path().join("other.conf");
    std::fs::write(&other, "vision = bakllava\n").unwrap();
    env.write_user("vision = llava\n");

    env.command_bare()
        .env("LLM_MANAGER_USER_CONFIG", &other)
        .arg("--user-config")
        .arg(&env.user_config)
        .arg("--system-config")
        .arg(&env.system_config)
        .args(["get", "vision"])
        .assert()
        .success()
        .stdout("llava\n");
}
