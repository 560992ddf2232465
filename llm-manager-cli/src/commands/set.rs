//! Set command implementation.
//!
//! Writes a task/model pair into the user tier, preserving everything else
//! in the file.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Settings};
use clap::Args;
use llm_manager::UpdateResult;

/// Set the model for a task in the user configuration.
#[derive(Args)]
pub struct SetCommand {
    /// Task name (e.g. text-generation)
    pub task: String,

    /// Model to use for the task (e.g. gemma2:2b)
    pub model: String,
}

impl SetCommand {
    /// Execute the set command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = Settings::load(global)?;
        let path = &settings.paths.user;

        let result = settings.store.upsert(path, &self.task, &self.model)?;
        settings
            .logger
            .info(&format!("Wrote {}", path.display()));

        if result == UpdateResult::Updated {
            warn_if_shadowed(&settings, &self.task, &self.model);
        }

        let verb = match result {
            UpdateResult::Created => "Set",
            UpdateResult::Updated => "Updated",
        };
        println!("{verb} {} = {}", self.task.trim(), self.model.trim());

        Ok(())
    }
}

/// Only the first line for a task is rewritten, while reads take the last
/// one, so a later duplicate keeps winning.
fn warn_if_shadowed(settings: &Settings, task: &str, model: &str) {
    let (task, model) = (task.trim(), model.trim());
    let loaded = settings.store.load(&settings.paths.user);
    if let Some(effective) = loaded.map.get(task).filter(|m| m.as_str() != model) {
        settings.logger.warn(&format!(
            "A later entry in {} still sets {task} = {effective}",
            settings.paths.user.display()
        ));
    }
}
