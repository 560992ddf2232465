//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "llm-manager";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = cli::command();

        if !global.quiet {
            for line in install_hint(self.shell) {
                eprintln!("# {line}");
            }
            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

/// Instructions for enabling the generated script, printed to stderr.
fn install_hint(shell: Shell) -> Vec<String> {
    let target = match shell {
        Shell::Bash => "~/.local/share/bash-completion/completions/llm-manager",
        Shell::Zsh => "~/.zsh/completions/_llm-manager",
        Shell::Fish => "~/.config/fish/completions/llm-manager.fish",
        Shell::PowerShell => "$PROFILE",
        _ => return Vec::new(),
    };

    vec![
        format!("Generating {shell} completion script"),
        "Run the following command to enable completions:".to_string(),
        format!("  {BIN_NAME} completions {shell} > {target}"),
    ]
}
