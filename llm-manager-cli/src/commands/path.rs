//! Command to show the resolved configuration file paths.

use crate::error::CliError;
use crate::utils::{shorten_path, GlobalOptions, Settings};
use clap::Args;
use llm_manager::Tier;

/// Show where the configuration files live.
#[derive(Args)]
pub struct PathCommand {
    /// Only print the path of this tier
    #[arg(long, value_enum)]
    pub tier: Option<TierArg>,

    /// Show full paths instead of shortened forms
    #[arg(long)]
    pub show_full_paths: bool,
}

/// Tier selector shared by commands.
#[derive(Clone, Copy, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TierArg {
    /// The system-wide file
    System,
    /// The per-user file
    User,
}

impl From<TierArg> for Tier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::System => Tier::System,
            TierArg::User => Tier::User,
        }
    }
}

impl PathCommand {
    /// Execute the path command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = Settings::load(global)?;

        let display = |tier: Tier| {
            let path = settings.paths.for_tier(tier);
            if self.show_full_paths {
                path.display().to_string()
            } else {
                shorten_path(path)
            }
        };

        match self.tier {
            Some(tier) => println!("{}", display(tier.into())),
            None => {
                for tier in [Tier::System, Tier::User] {
                    let marker = if settings.paths.for_tier(tier).exists() {
                        ""
                    } else {
                        " (missing)"
                    };
                    println!("{tier}\t{}{marker}", display(tier));
                }
            }
        }

        Ok(())
    }
}
