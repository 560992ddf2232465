//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `set`: Set the model for a task in the user configuration
//! - `get`: Print the model configured for a task
//! - `show`: Show all configured tasks
//! - `path`: Show where the configuration files live
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod get;
pub mod path;
pub mod set;
pub mod show;

pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use path::PathCommand;
pub use set::SetCommand;
pub use show::ShowCommand;
