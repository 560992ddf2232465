//! Account lookup for the user who invoked `sudo`.

use std::path::PathBuf;

use crate::error::Result;

/// The parts of an account this crate needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    /// Login name.
    pub name: String,
    /// Numeric user id.
    pub uid: u32,
    /// Numeric primary group id.
    pub gid: u32,
    /// Home directory.
    pub home: PathBuf,
}

/// Signature of a function resolving a login name to an account.
///
/// `Ok(None)` means the account does not exist.
pub type UserLookup = fn(&str) -> Result<Option<UserEntry>>;

/// Look `name` up in the system user database.
///
/// Goes through the C library, so accounts served by NSS modules (LDAP,
/// SSSD, systemd-homed) resolve as well as local ones.
///
/// # Errors
///
/// Returns [`crate::Error::UserLookup`] if the database query itself fails.
#[cfg(unix)]
pub fn lookup_system_user(name: &str) -> Result<Option<UserEntry>> {
    use nix::unistd::User;

    let user = User::from_name(name).map_err(|errno| crate::Error::UserLookup {
        user: name.to_string(),
        source: std::io::Error::from(errno),
    })?;

    Ok(user.map(|user| UserEntry {
        name: user.name,
        uid: user.uid.as_raw(),
        gid: user.gid.as_raw(),
        home: user.dir,
    }))
}

/// Look `name` up in the system user database.
///
/// There is no `sudo` hand-over outside unix, so no account ever matches.
///
/// # Errors
///
/// Never fails on this platform.
#[cfg(not(unix))]
pub fn lookup_system_user(_name: &str) -> Result<Option<UserEntry>> {
    Ok(None)
}
