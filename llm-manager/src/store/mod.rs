//! Reading and updating configuration files on disk.
//!
//! The store ties the line parser to the filesystem:
//!
//! - [`ConfigStore::load`] folds a file into a [`ConfigMap`]. Read failures
//!   never abort; they come back as [`LoadWarning`]s next to whatever could be
//!   parsed, and the file contributes no entries.
//! - [`ConfigStore::upsert`] validates a key/value pair, rewrites or appends
//!   the key's line, and replaces the file in one step.
//!
//! # Examples
//!
//! ```no_run
//! use llm_manager::store::{ConfigStore, UpdateResult};
//! use llm_manager::Syntax;
//! use std::path::Path;
//!
//! let store = ConfigStore::new(Syntax::extended());
//! let path = Path::new("/tmp/llm.conf");
//!
//! let result = store.upsert(path, "vision", "llava").unwrap();
//! assert!(matches!(result, UpdateResult::Created | UpdateResult::Updated));
//!
//! let loaded = store.load(path);
//! assert_eq!(loaded.map.get("vision").map(String::as_str), Some("llava"));
//! ```

mod document;
mod writer;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths::Owner;
use crate::syntax::Syntax;
use crate::tier::ConfigMap;

pub use document::{ConfigDocument, ConfigLine, ParseIssue, Terminator, UpdateResult};

/// A non-fatal problem found while loading a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The file exists but could not be read.
    Unreadable {
        /// The file.
        path: PathBuf,
        /// Why reading failed.
        reason: String,
    },
    /// A line was skipped.
    InvalidLine {
        /// The file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Trimmed line content.
        text: String,
    },
    /// A block comment runs to the end of the file.
    UnclosedBlockComment {
        /// The file.
        path: PathBuf,
        /// 1-based line number of the opening line.
        line: usize,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, reason } => {
                write!(f, "Error reading {}: {reason}", path.display())
            }
            Self::InvalidLine { path, line, text } => {
                write!(
                    f,
                    "Ignoring invalid line {line} in {}: {text}",
                    path.display()
                )
            }
            Self::UnclosedBlockComment { path, line } => {
                write!(
                    f,
                    "Block comment opened at line {line} in {} is never closed",
                    path.display()
                )
            }
        }
    }
}

/// Result of [`ConfigStore::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loaded {
    /// Entries of the file. Empty when the file is absent or unreadable.
    pub map: ConfigMap,
    /// Problems noticed while reading.
    pub warnings: Vec<LoadWarning>,
}

/// Reads and writes configuration files with one [`Syntax`].
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    syntax: Syntax,
    owner: Option<Owner>,
}

impl ConfigStore {
    /// Create a store for files written in `syntax`.
    #[must_use]
    pub fn new(syntax: Syntax) -> Self {
        Self {
            syntax,
            owner: None,
        }
    }

    /// Hand written files over to `owner` (used when running under sudo).
    #[must_use]
    pub fn with_owner(mut self, owner: Option<Owner>) -> Self {
        self.owner = owner;
        self
    }

    /// The syntax files are parsed with.
    #[must_use]
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Load `path` into a map.
    ///
    /// A missing file yields an empty map. Any other read failure yields an
    /// empty map and a warning.
    #[must_use]
    pub fn load(&self, path: &Path) -> Loaded {
        let document = match self.read_document(path) {
            Ok(document) => document,
            Err(err) => {
                log::debug!("treating {} as empty: {err}", path.display());
                return Loaded {
                    map: ConfigMap::new(),
                    warnings: vec![LoadWarning::Unreadable {
                        path: path.to_path_buf(),
                        reason: read_failure_reason(&err),
                    }],
                };
            }
        };

        let (map, issues) = document.entries();
        let warnings = issues
            .into_iter()
            .map(|issue| match issue {
                ParseIssue::InvalidLine { line, text } => LoadWarning::InvalidLine {
                    path: path.to_path_buf(),
                    line,
                    text,
                },
                ParseIssue::UnclosedBlockComment { line } => LoadWarning::UnclosedBlockComment {
                    path: path.to_path_buf(),
                    line,
                },
            })
            .collect();

        Loaded { map, warnings }
    }

    /// Read and parse `path`; a missing file is an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadFailed`] if the file exists but cannot be read as
    /// UTF-8 text.
    pub fn read_document(&self, path: &Path) -> Result<ConfigDocument> {
        if path.is_dir() {
            return Err(Error::ReadFailed {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::Other, "is a directory"),
            });
        }

        match fs::read_to_string(path) {
            Ok(content) => Ok(ConfigDocument::parse(&content, self.syntax.clone())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Ok(ConfigDocument::empty(self.syntax.clone()))
            }
            Err(source) => Err(Error::ReadFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Set `key` to `value` in the file at `path`.
    ///
    /// Both strings are trimmed and validated before the file is touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a forbidden key or value,
    /// [`Error::ReadFailed`] if the existing file cannot be read, and
    /// [`Error::CreateDir`] or [`Error::WriteFailed`] if it cannot be written.
    pub fn upsert(&self, path: &Path, key: &str, value: &str) -> Result<UpdateResult> {
        let (key, value) = self.validate(key, value)?;

        let mut document = self.read_document(path)?;
        let result = document.upsert(key, value);
        writer::write_atomic(path, &document.render(), self.owner)?;

        log::debug!("{result:?} '{key}' in {}", path.display());
        Ok(result)
    }

    /// Check that a key/value pair can be written and parsed back unchanged.
    ///
    /// Returns the trimmed pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if either part is empty, contains a line
    /// break, or starts with a comment marker; if the key contains any
    /// operator; or if the value contains an operator that ranks at or before
    /// the canonical one.
    ///
    /// # Examples
    ///
    /// ```
    /// use llm_manager::store::ConfigStore;
    /// use llm_manager::Syntax;
    ///
    /// let store = ConfigStore::new(Syntax::extended());
    /// assert!(store.validate("text-generation", "gemma2:2b").is_ok());
    /// assert!(store.validate("text=generation", "gemma2").is_err());
    /// assert!(store.validate("vision", "# llava").is_err());
    /// ```
    pub fn validate<'a>(&self, key: &'a str, value: &'a str) -> Result<(&'a str, &'a str)> {
        let key = key.trim();
        let value = value.trim();

        self.check_common("task", key)?;
        self.check_common("model", value)?;

        if let Some(op) = self.syntax.operators().iter().find(|op| key.contains(op.as_str())) {
            return Err(invalid("task", format!("must not contain '{}'", op.trim())));
        }

        if let Some(op) = self
            .syntax
            .operators_shadowing_canonical()
            .find(|op| value.contains(op))
        {
            return Err(invalid("model", format!("must not contain '{}'", op.trim())));
        }

        Ok((key, value))
    }

    fn check_common(&self, field: &str, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(invalid(field, "must not be empty".to_string()));
        }
        if text.contains(&['\n', '\r'][..]) {
            return Err(invalid(field, "must not contain a line break".to_string()));
        }
        if self.syntax.is_comment(text) {
            return Err(invalid(field, "must not start with a comment marker".to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: String) -> Error {
    Error::Validation {
        field: field.to_string(),
        message,
    }
}

fn read_failure_reason(err: &Error) -> String {
    match err {
        Error::ReadFailed { source, .. } if source.kind() == io::ErrorKind::PermissionDenied => {
            "permission denied".to_string()
        }
        Error::ReadFailed { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

/// Look `key` up in a map.
///
/// Absence is not an error here; callers decide what a missing key means.
#[must_use]
pub fn lookup<'m>(map: &'m ConfigMap, key: &str) -> Option<&'m str> {
    map.get(key).map(String::as_str)
}
