#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # llm-manager
//!
//! A library for keeping task-to-model mappings in plain-text configuration
//! files.
//!
//! Each file holds lines such as `text-generation = gemma2:2b`, mixed with
//! comments and blank lines that an update leaves exactly as they were. Two
//! files are consulted: a system-wide one and a per-user one that overrides
//! it.
//!
//! ## Core Types
//!
//! - [`Syntax`]: operator table and comment markers driving the parser
//! - [`ConfigStore`] and [`ConfigDocument`]: loading and in-place updates
//! - [`MergedView`] and [`merge`]: the system/user overlay
//! - [`PathResolver`] and [`TierPaths`]: where the two files live
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use llm_manager::{ConfigDocument, Syntax, UpdateResult};
//!
//! let mut doc = ConfigDocument::parse("# models\nvision = llava\n", Syntax::extended());
//! assert_eq!(doc.upsert("audio", "whisper"), UpdateResult::Created);
//! assert_eq!(doc.render(), "# models\nvision = llava\naudio = whisper\n");
//! ```

pub mod error;
pub mod logging;
pub mod paths;
pub mod store;
pub mod syntax;
pub mod tier;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use paths::{EnvPathResolver, FixedPathResolver, Owner, PathResolver, TierPaths};
pub use store::{lookup, ConfigDocument, ConfigStore, LoadWarning, Loaded, UpdateResult};
pub use syntax::{LineKind, Syntax, SyntaxPreset};
pub use tier::{merge, ConfigMap, MergedView, Tier};
