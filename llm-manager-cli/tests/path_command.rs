//! Integration tests for the `path` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

/// Both tiers are listed, with missing files flagged.
#[test]
fn test_path_lists_both_tiers() {
    let env = TestEnv::new();
    env.write_system("");

    let system = env.system_config.display().to_string();
    let user = env.user_config.display().to_string();

    env.command()
        .args(["path", "--show-full-paths"])
        .assert()
        .success()
        .stdout(format!("system\t{system}\nuser\t{user} (missing)\n"));
}

/// A single tier prints just its path.
#[test]
fn test_path_single_tier() {
    let env = TestEnv::new();

    env.command()
        .args(["path", "--tier", "user", "--show-full-paths"])
        .assert()
        .success()
        .stdout(format!("{}\n", env.user_config.display()));
}

/// By default the user tier resolves under `$HOME/.config/llm-manager`.
#[test]
fn test_path_default_user_tier() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["path", "--tier", "user"])
        .assert()
        .success()
        .stdout("~/.config/llm-manager/llm.conf\n");
}

/// `XDG_CONFIG_HOME` moves the user tier.
#[test]
fn test_path_honours_xdg_config_home() {
    let env = TestEnv::new();
    let xdg = env.path().join("xdg");

    env.command_bare()
        .env("XDG_CONFIG_HOME", &xdg)
        .args(["path", "--tier", "user", "--show-full-paths"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            xdg.join("llm-manager").join("llm.conf").display().to_string(),
        ));
}

/// The system tier defaults to /etc/llm.conf.
#[test]
fn test_path_default_system_tier() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["path", "--tier", "system"])
        .assert()
        .success()
        .stdout("/etc/llm.conf\n");
}
