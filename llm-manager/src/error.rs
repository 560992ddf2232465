//! Error types for the llm-manager library.
//!
//! This module provides the error hierarchy for parsing, updating and locating
//! configuration files, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an llm-manager error.
///
/// # Examples
///
/// ```
/// use llm_manager::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("gemma2:2b".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the llm-manager library.
#[derive(Debug, Error)]
pub enum Error {
    /// A task or model name failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ReadFailed {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    WriteFailed {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The directory holding a configuration file could not be created.
    #[error("cannot create configuration directory {}: {source}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The user named by `SUDO_USER` has no account.
    #[error("cannot find home directory for sudo user '{user}'")]
    UnknownUser {
        /// The user name that was looked up.
        user: String,
    },

    /// The home directory of the invoking user could not be determined.
    #[error("cannot determine home directory")]
    HomeDirectory,

    /// An unknown syntax preset was requested.
    #[error("unknown syntax '{name}' (expected 'simple' or 'extended')")]
    InvalidSyntax {
        /// The requested preset name.
        name: String,
    },

    /// The user database could not be queried.
    #[error("cannot look up sudo user '{user}': {source}")]
    UserLookup {
        /// The user name that was looked up.
        user: String,
        /// The underlying system error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Check if error is a task/model validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use llm_manager::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "task".into(),
    ///     message: "must not contain '='".into(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if error is caused by a denied permission on the filesystem.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::ReadFailed { source, .. }
            | Self::WriteFailed { source, .. }
            | Self::CreateDir { source, .. } => source.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }
}
