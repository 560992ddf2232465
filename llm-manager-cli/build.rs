//! Build script for llm-manager-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("llm-manager")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage task-to-model mappings for local LLMs")
        .long_about(
            "Keep task-to-model mappings in a system file (/etc/llm.conf) and a per-user \
             file (~/.config/llm-manager/llm.conf). User entries override system entries. \
             `llm-manager <task>` is shorthand for `llm-manager get <task>`.",
        )
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("user-config")
                .long("user-config")
                .help("Override the user configuration file")
                .value_name("PATH")
                .global(true)
                .env("LLM_MANAGER_USER_CONFIG"),
        )
        .arg(
            Arg::new("system-config")
                .long("system-config")
                .help("Override the system configuration file")
                .value_name("PATH")
                .global(true)
                .env("LLM_MANAGER_SYSTEM_CONFIG"),
        )
        .arg(
            Arg::new("syntax")
                .long("syntax")
                .help("Configuration file syntax (simple or extended)")
                .value_name("SYNTAX")
                .global(true)
                .default_value("extended")
                .env("LLM_MANAGER_SYNTAX"),
        )
        .subcommands(vec![
            Command::new("set")
                .about("Set the model for a task in the user configuration")
                .long_about("Create or update a task entry, preserving comments and layout"),
            Command::new("get")
                .about("Print the model configured for a task")
                .long_about("Print the model for a task, or report that it is not set (exit 1)"),
            Command::new("show")
                .about("Show all configured tasks")
                .long_about("List the merged configuration as text, JSON, CSV or TSV"),
            Command::new("path")
                .about("Show where the configuration files live")
                .long_about("Print the resolved system and user configuration file paths"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("llm-manager.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
