//! Environment-driven path resolution.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths::users::{lookup_system_user, UserEntry, UserLookup};
use crate::paths::{Owner, PathResolver, TierPaths};

/// Fixed location of the system tier.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/llm.conf";

/// Directory under the configuration home holding the user tier.
pub const APP_DIR_NAME: &str = "llm-manager";

/// File name of the user tier.
pub const CONFIG_FILE_NAME: &str = "llm.conf";

/// Resolves tier paths for the invoking user.
///
/// Under `sudo` the user tier belongs to `SUDO_USER`, whose home directory is
/// looked up in the system user database; files written on their behalf are handed
/// back to them. Otherwise `XDG_CONFIG_HOME` (when absolute) or `~/.config`
/// is used.
///
/// # Examples
///
/// ```
/// use llm_manager::paths::{EnvPathResolver, PathResolver};
/// use std::path::PathBuf;
///
/// let paths = EnvPathResolver::new()
///     .with_home(Some(PathBuf::from("/home/alice")))
///     .resolve()
///     .unwrap();
/// assert_eq!(paths.user, PathBuf::from("/home/alice/.config/llm-manager/llm.conf"));
/// assert_eq!(paths.system, PathBuf::from("/etc/llm.conf"));
/// ```
#[derive(Debug, Clone)]
pub struct EnvPathResolver {
    sudo_user: Option<String>,
    home: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
    lookup_user: UserLookup,
    system_path: PathBuf,
}

impl Default for EnvPathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvPathResolver {
    /// A resolver with no environment captured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sudo_user: None,
            home: None,
            xdg_config_home: None,
            lookup_user: lookup_system_user,
            system_path: PathBuf::from(SYSTEM_CONFIG_PATH),
        }
    }

    /// Capture `SUDO_USER`, `XDG_CONFIG_HOME` and the home directory from the
    /// current process.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new()
            .with_sudo_user(env::var("SUDO_USER").ok())
            .with_home(home::home_dir())
            .with_xdg_config_home(env::var_os("XDG_CONFIG_HOME").map(PathBuf::from))
    }

    /// Set the user who invoked `sudo`. Empty names are ignored.
    #[must_use]
    pub fn with_sudo_user(mut self, user: Option<String>) -> Self {
        self.sudo_user = user.filter(|u| !u.trim().is_empty());
        self
    }

    /// Set the home directory of the current user.
    #[must_use]
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home.filter(|h| !h.as_os_str().is_empty());
        self
    }

    /// Set the XDG configuration home. Relative paths are ignored.
    #[must_use]
    pub fn with_xdg_config_home(mut self, dir: Option<PathBuf>) -> Self {
        self.xdg_config_home = dir.filter(|d| d.is_absolute());
        self
    }

    /// Resolve sudo users with `lookup` instead of the system database.
    #[must_use]
    pub fn with_user_lookup(mut self, lookup: UserLookup) -> Self {
        self.lookup_user = lookup;
        self
    }

    /// Use a different system tier path.
    #[must_use]
    pub fn with_system_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.system_path = path.into();
        self
    }

    fn user_file(config_home: &Path) -> PathBuf {
        config_home.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)
    }
}

impl PathResolver for EnvPathResolver {
    fn resolve(&self) -> Result<TierPaths> {
        if let Some(ref user) = self.sudo_user {
            let entry: UserEntry = (self.lookup_user)(user)?
                .ok_or_else(|| Error::UnknownUser { user: user.clone() })?;
            log::debug!("running under sudo, using home of '{user}'");

            return Ok(TierPaths {
                system: self.system_path.clone(),
                user: Self::user_file(&entry.home.join(".config")),
                owner: Some(Owner {
                    uid: entry.uid,
                    gid: entry.gid,
                }),
            });
        }

        let config_home = match (&self.xdg_config_home, &self.home) {
            (Some(xdg), _) => xdg.clone(),
            (None, Some(home)) => home.join(".config"),
            (None, None) => return Err(Error::HomeDirectory),
        };

        Ok(TierPaths::new(
            self.system_path.clone(),
            Self::user_file(&config_home),
        ))
    }
}
