//! Locating the site makefile inside the repository.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CheckverError, Result};

/// Fails with [CheckverError::RepositoryUnreadable] unless `repo` can be listed.
///
/// Run before any git command so a bad repository path is reported as such
/// instead of as a failure to spawn git.
pub fn ensure_readable(repo: &Path) -> Result<()> {
    fs::read_dir(repo)
        .map(|_| ())
        .map_err(|source| CheckverError::RepositoryUnreadable {
            path: repo.to_path_buf(),
            source,
        })
}

/// Finds `name` among the entries of `repo` and returns its full path.
///
/// Only the top level of the repository is listed, and the entry name must
/// match exactly.
///
/// # Returns
/// * `Ok(PathBuf)` - `repo` joined with `name`
/// * `Err(RepositoryUnreadable)` - If `repo` cannot be listed
/// * `Err(MakefileNotFound)` - If no entry is called `name`
pub fn locate_makefile(repo: &Path, name: &str) -> Result<PathBuf> {
    let unreadable = |source| CheckverError::RepositoryUnreadable {
        path: repo.to_path_buf(),
        source,
    };

    let mut found = false;
    for entry in fs::read_dir(repo).map_err(unreadable)? {
        if entry.map_err(unreadable)?.file_name() == name {
            found = true;
            break;
        }
    }

    let path = repo.join(name);
    if !found {
        return Err(CheckverError::MakefileNotFound { path });
    }

    debug!(path = %path.display(), "located makefile");
    Ok(path)
}
