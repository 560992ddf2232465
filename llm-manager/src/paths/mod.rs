//! Locating the system and user configuration files.
//!
//! Path resolution depends on the process environment (`SUDO_USER`, `HOME`,
//! `XDG_CONFIG_HOME`), so it lives behind the [`PathResolver`] trait and the
//! rest of the crate only ever sees resolved [`TierPaths`].
//!
//! # Examples
//!
//! ```
//! use llm_manager::paths::{FixedPathResolver, PathResolver, TierPaths};
//!
//! let resolver = FixedPathResolver::new(TierPaths::new("/etc/llm.conf", "/tmp/llm.conf"));
//! let paths = resolver.resolve().unwrap();
//! assert_eq!(paths.user.to_str(), Some("/tmp/llm.conf"));
//! ```

mod resolver;
mod users;

use std::path::PathBuf;

use crate::error::Result;
use crate::tier::Tier;

pub use resolver::{EnvPathResolver, APP_DIR_NAME, CONFIG_FILE_NAME, SYSTEM_CONFIG_PATH};
pub use users::{lookup_system_user, UserEntry, UserLookup};

/// The user a written file should belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner {
    /// Numeric user id.
    pub uid: u32,
    /// Numeric group id.
    pub gid: u32,
}

/// Resolved locations of both configuration tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierPaths {
    /// System-wide file (read only for this tool).
    pub system: PathBuf,
    /// Per-user file.
    pub user: PathBuf,
    /// Owner for files written on behalf of a sudo user.
    pub owner: Option<Owner>,
}

impl TierPaths {
    /// Paths with no ownership hand-over.
    pub fn new(system: impl Into<PathBuf>, user: impl Into<PathBuf>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            owner: None,
        }
    }

    /// Replace the system path if `system` is given.
    #[must_use]
    pub fn with_system_override(mut self, system: Option<PathBuf>) -> Self {
        if let Some(system) = system {
            self.system = system;
        }
        self
    }

    /// Replace the user path if `user` is given.
    #[must_use]
    pub fn with_user_override(mut self, user: Option<PathBuf>) -> Self {
        if let Some(user) = user {
            self.user = user;
        }
        self
    }

    /// Path of the given tier.
    #[must_use]
    pub fn for_tier(&self, tier: Tier) -> &PathBuf {
        match tier {
            Tier::System => &self.system,
            Tier::User => &self.user,
        }
    }
}

/// Something that knows where the two configuration files live.
pub trait PathResolver {
    /// Resolve both tier paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoking user's home directory cannot be
    /// determined.
    fn resolve(&self) -> Result<TierPaths>;
}

/// A resolver returning fixed paths.
#[derive(Debug, Clone)]
pub struct FixedPathResolver {
    paths: TierPaths,
}

impl FixedPathResolver {
    /// Always resolve to `paths`.
    #[must_use]
    pub fn new(paths: TierPaths) -> Self {
        Self { paths }
    }
}

impl PathResolver for FixedPathResolver {
    fn resolve(&self) -> Result<TierPaths> {
        Ok(self.paths.clone())
    }
}
