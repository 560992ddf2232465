//! Configuration tiers and the merged view.
//!
//! Two files contribute entries: the system tier and the user tier. The user
//! tier wins on every key both define. The merged view is rebuilt from disk on
//! every invocation and never cached.

use std::collections::BTreeMap;
use std::fmt;

use crate::paths::TierPaths;
use crate::store::{ConfigStore, LoadWarning};

/// Key to value mapping of one file or of the merged view.
///
/// Sorted by key, so listing order is stable.
pub type ConfigMap = BTreeMap<String, String>;

/// A configuration scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// System-wide defaults, never written by this tool.
    System,
    /// Per-user overrides.
    User,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
        }
    }
}

/// Overlay `user` on top of `system`.
///
/// # Examples
///
/// ```
/// use llm_manager::{merge, ConfigMap};
///
/// let system = ConfigMap::from([("a".into(), "1".into()), ("b".into(), "2".into())]);
/// let user = ConfigMap::from([("b".into(), "3".into()), ("c".into(), "4".into())]);
///
/// let merged = merge(&system, &user);
/// assert_eq!(
///     merged,
///     ConfigMap::from([
///         ("a".into(), "1".into()),
///         ("b".into(), "3".into()),
///         ("c".into(), "4".into()),
///     ])
/// );
/// ```
#[must_use]
pub fn merge(system: &ConfigMap, user: &ConfigMap) -> ConfigMap {
    let mut merged = system.clone();
    merged.extend(user.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Both tiers loaded from disk, plus their overlay.
#[derive(Debug, Clone, Default)]
pub struct MergedView {
    system: ConfigMap,
    user: ConfigMap,
    merged: ConfigMap,
    warnings: Vec<LoadWarning>,
}

impl MergedView {
    /// Load both tiers with `store` and merge them.
    ///
    /// Unreadable files contribute nothing; their warnings are collected.
    #[must_use]
    pub fn load(store: &ConfigStore, paths: &TierPaths) -> Self {
        let system = store.load(&paths.system);
        let user = store.load(&paths.user);

        let mut warnings = system.warnings;
        warnings.extend(user.warnings);

        Self::from_maps(system.map, user.map).with_warnings(warnings)
    }

    /// Merge two already-loaded maps.
    #[must_use]
    pub fn from_maps(system: ConfigMap, user: ConfigMap) -> Self {
        let merged = merge(&system, &user);
        Self {
            system,
            user,
            merged,
            warnings: Vec::new(),
        }
    }

    fn with_warnings(mut self, warnings: Vec<LoadWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// The merged map.
    #[must_use]
    pub fn entries(&self) -> &ConfigMap {
        &self.merged
    }

    /// Entries of one tier only.
    #[must_use]
    pub fn tier(&self, tier: Tier) -> &ConfigMap {
        match tier {
            Tier::System => &self.system,
            Tier::User => &self.user,
        }
    }

    /// Resolved value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        crate::store::lookup(&self.merged, key)
    }

    /// Which tier the resolved value of `key` comes from.
    #[must_use]
    pub fn source(&self, key: &str) -> Option<Tier> {
        if self.user.contains_key(key) {
            Some(Tier::User)
        } else if self.system.contains_key(key) {
            Some(Tier::System)
        } else {
            None
        }
    }

    /// Warnings from loading either tier.
    #[must_use]
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Whether neither tier defines anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }
}
