//! Main entry point for the llm-manager CLI.
//!
//! This is the command-line interface for the task-to-model configuration.
//! It provides commands for managing mappings:
//! - `set`: Set the model for a task in the user configuration
//! - `get`: Print the model configured for a task
//! - `show`: Show all configured tasks
//! - `path`: Show where the configuration files live
//!
//! `llm-manager <task>` is shorthand for `llm-manager get <task>`.

mod cli;
mod commands;
mod error;
mod utils;

use clap::FromArgMatches;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments, expanding the bare-task shortcut first
    let args = cli::normalize_args(
        std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
    );
    let matches = cli::command().get_matches_from(args);
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        user_config: cli.user_config,
        system_config: cli.system_config,
        syntax: cli.syntax,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Set(cmd) => cmd.execute(&global),
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Path(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) if e.is_plain_result() => {
            println!("{e}");
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("hint: {hint}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
