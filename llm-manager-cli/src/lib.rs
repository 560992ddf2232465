//! Library exports for llm-manager-cli.
//!
//! This module exports the CLI structure so integration tests and tooling
//! can inspect the command definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
