//! Get command implementation.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Settings};
use clap::Args;

/// Print the model configured for a task.
#[derive(Args)]
pub struct GetCommand {
    /// Task name to look up
    pub task: String,
}

impl GetCommand {
    /// Execute the get command.
    ///
    /// Prints the bare model name so scripts can capture it.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let task = self.task.trim();
        if task.is_empty() {
            return Err(CliError::InvalidArguments(
                "task must not be empty".to_string(),
            ));
        }

        let settings = Settings::load(global)?;
        let view = settings.load_view();

        match view.get(task) {
            Some(model) => {
                if let Some(tier) = view.source(task) {
                    settings.logger.debug(&format!("'{task}' comes from the {tier} tier"));
                }
                println!("{model}");
                Ok(())
            }
            None => Err(CliError::NotSet(task.to_string())),
        }
    }
}
