//! Whole-file replacement of configuration files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths::Owner;

/// Replace `path` with `contents` via a temporary file in the same directory.
///
/// Missing parent directories are created. An existing file keeps its
/// permissions; a new file is readable and writable by its owner only. When
/// `owner` is given, the file and any directory created here are handed over
/// to that user. A symlink at `path` is written through: its target is
/// replaced and the link is left in place.
pub(crate) fn write_atomic(path: &Path, contents: &str, owner: Option<Owner>) -> Result<()> {
    let target = resolve_symlink(path)?;
    let path = target.as_path();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let created_dirs = missing_ancestors(&parent);
    fs::create_dir_all(&parent).map_err(|source| Error::CreateDir {
        path: parent.clone(),
        source,
    })?;

    let write_failed = |source| Error::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let existing_permissions = fs::metadata(path).ok().map(|m| m.permissions());

    let mut temp = tempfile::Builder::new()
        .prefix(".llm-manager-")
        .tempfile_in(&parent)
        .map_err(write_failed)?;
    temp.write_all(contents.as_bytes()).map_err(write_failed)?;
    temp.as_file().sync_all().map_err(write_failed)?;

    let permissions_set = match existing_permissions {
        Some(permissions) => temp.as_file().set_permissions(permissions),
        None => restrict_to_owner(temp.as_file()),
    };
    permissions_set.map_err(write_failed)?;

    temp.persist(path).map_err(|e| write_failed(e.error))?;

    if let Some(owner) = owner {
        for dir in &created_dirs {
            hand_over(dir, owner)?;
        }
        hand_over(path, owner)?;
    }

    Ok(())
}

/// The file a write to `path` should land in.
fn resolve_symlink(path: &Path) -> Result<PathBuf> {
    let is_link = fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink());
    if !is_link {
        return Ok(path.to_path_buf());
    }

    if let Ok(target) = fs::canonicalize(path) {
        return Ok(target);
    }

    // Dangling link: create the file it points at.
    let link = fs::read_link(path).map_err(|source| Error::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match path.parent() {
        Some(parent) => parent.join(link),
        None => link,
    })
}

/// Ancestors of `dir` (including itself) that do not exist, outermost first.
fn missing_ancestors(dir: &Path) -> Vec<PathBuf> {
    let mut missing: Vec<PathBuf> = dir
        .ancestors()
        .take_while(|p| !p.as_os_str().is_empty() && !p.exists())
        .map(Path::to_path_buf)
        .collect();
    missing.reverse();
    missing
}

#[cfg(unix)]
fn restrict_to_owner(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_to_owner(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

#[cfg(unix)]
fn hand_over(path: &Path, owner: Owner) -> Result<()> {
    std::os::unix::fs::chown(path, Some(owner.uid), Some(owner.gid)).map_err(|source| {
        Error::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn hand_over(_path: &Path, _owner: Owner) -> Result<()> {
    Ok(())
}
