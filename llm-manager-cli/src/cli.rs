//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, GetCommand, PathCommand, SetCommand, ShowCommand};
use clap::{Arg, ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Names accepted as the first positional argument without being treated
/// as a task for the `get` shortcut.
pub const SUBCOMMAND_NAMES: &[&str] = &["set", "get", "show", "path", "completions", "help"];

/// Global options that take a separate value argument.
pub const VALUE_OPTIONS: &[&str] = &["--user-config", "--system-config", "--syntax"];

/// Version text shown by `-v/--version` after the program name.
pub const VERSION: &str = concat!("version ", env!("CARGO_PKG_VERSION"));

/// Command-line tool for managing task-to-model mappings.
#[derive(Parser)]
#[command(name = "llm-manager")]
#[command(
    version = VERSION,
    about = "Manage task-to-model mappings for local LLMs",
    long_about = None,
    disable_version_flag = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration file
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        env = "LLM_MANAGER_USER_CONFIG"
    )]
    pub user_config: Option<PathBuf>,

    /// Override the system configuration file
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        env = "LLM_MANAGER_SYSTEM_CONFIG"
    )]
    pub system_config: Option<PathBuf>,

    /// Configuration file syntax (simple or extended)
    #[arg(
        long,
        value_name = "SYNTAX",
        global = true,
        env = "LLM_MANAGER_SYNTAX",
        default_value = "extended"
    )]
    pub syntax: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Set the model for a task in the user configuration
    Set(SetCommand),

    /// Print the model configured for a task
    Get(GetCommand),

    /// Show all configured tasks
    Show(ShowCommand),

    /// Show where the configuration files live
    Path(PathCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// The full command definition, including the `-v/--version` flag.
pub fn command() -> clap::Command {
    Cli::command().arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .help("Print version")
            .action(ArgAction::Version),
    )
}

/// Rewrite `llm-manager <task>` into `llm-manager get <task>`.
///
/// The first positional argument decides: a known subcommand name leaves the
/// arguments untouched, anything else gets `get` inserted before it. Global
/// options and their values may precede it.
pub fn normalize_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut args: Vec<String> = args.into_iter().map(Into::into).collect();

    let mut index = 1;
    while index < args.len() {
        let arg = args[index].as_str();
        if arg == "--" {
            return args;
        }
        if VALUE_OPTIONS.contains(&arg) {
            index += 2;
            continue;
        }
        if arg.starts_with('-') {
            index += 1;
            continue;
        }
        if !SUBCOMMAND_NAMES.contains(&arg) {
            args.insert(index, "get".to_string());
        }
        return args;
    }

    args
}
