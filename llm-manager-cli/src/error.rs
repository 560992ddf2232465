//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use llm_manager::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error while producing output.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// The requested task has no model in either tier.
    NotSet(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Task not set
    /// - 4: Invalid arguments or rejected task/model
    /// - 5: I/O error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotSet(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::Validation { .. } => 4,
                LibError::UnknownUser { .. }
                | LibError::UserLookup { .. }
                | LibError::HomeDirectory
                | LibError::InvalidSyntax { .. } => 7,
                LibError::ReadFailed { .. }
                | LibError::WriteFailed { .. }
                | LibError::CreateDir { .. } => 5,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }

    /// A follow-up suggestion printed after the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Library(e) if e.is_permission_denied() => Some(
                "check the file permissions, or pass --user-config to write elsewhere",
            ),
            _ => None,
        }
    }

    /// Whether this error is reported on stdout as a plain result line.
    pub fn is_plain_result(&self) -> bool {
        matches!(self, CliError::NotSet(_))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::NotSet(task) => write!(f, "{task} is not set."),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
