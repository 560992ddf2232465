//! Utility functions for CLI operations.
//!
//! This module turns global options into the settings every command runs
//! with: the configuration syntax, the two tier paths and a logger.

use crate::error::CliError;
use llm_manager::{
    init_logger, ConfigStore, EnvPathResolver, Logger, MergedView, PathResolver, SyntaxPreset,
    TierPaths,
};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration file.
    pub user_config: Option<PathBuf>,

    /// Override the system configuration file.
    pub system_config: Option<PathBuf>,

    /// Name of the configuration syntax.
    pub syntax: String,
}

/// Everything a command needs to read or write configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where the system and user tiers live.
    pub paths: TierPaths,
    /// Store bound to the selected syntax and file owner.
    pub store: ConfigStore,
    /// Logger for warnings and diagnostics.
    pub logger: Logger,
}

impl Settings {
    /// Assemble settings from global options and the environment.
    ///
    /// Explicit paths win over resolved ones. When both paths are given the
    /// environment is not consulted at all.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let logger = init_logger(global.verbose, global.quiet);
        let preset: SyntaxPreset = global.syntax.parse()?;

        let user_override = checked_override("user", global.user_config.as_deref())?;
        let system_override = checked_override("system", global.system_config.as_deref())?;

        let paths = match (system_override, user_override) {
            (Some(system), Some(user)) => TierPaths::new(system, user),
            (system, user) => EnvPathResolver::from_env()
                .resolve()?
                .with_system_override(system)
                .with_user_override(user),
        };

        logger.debug(&format!("syntax: {preset}"));
        logger.debug(&format!("system config: {}", paths.system.display()));
        logger.debug(&format!("user config: {}", paths.user.display()));

        let store = ConfigStore::new(preset.syntax()).with_owner(paths.owner);
        Ok(Self {
            paths,
            store,
            logger,
        })
    }

    /// Load both tiers and report anything odd found while reading them.
    pub fn load_view(&self) -> MergedView {
        let view = MergedView::load(&self.store, &self.paths);
        for warning in view.warnings() {
            self.logger.warn(&warning.to_string());
        }
        view
    }
}

fn checked_override(tier: &str, path: Option<&Path>) -> Result<Option<PathBuf>, CliError> {
    match path {
        Some(p) if p.as_os_str().is_empty() => Err(CliError::Config(format!(
            "{tier} configuration path must not be empty"
        ))),
        Some(p) => Ok(Some(p.to_path_buf())),
        None => Ok(None),
    }
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
