//! Main lookup workflow orchestration
//!
//! ```text
//! INIT -> BRANCH_SWITCHED -> MAKEFILE_LOCATED -> SCANNED -> BRANCH_RESTORED
//!   |            |                  |               |
//!   +------------+------- FATAL ----+---------------+
//! ```
//!
//! Once the upstream ref is checked out, the original branch is restored on
//! every path out of the workflow, including locate and scan failures.

use tracing::{debug, error, info};

use crate::config::SiteConfig;
use crate::error::{CheckverError, Result};
use crate::git::{upstream_ref, CommandRunner, SiteRepo};
use crate::makefile;
use crate::outcome::LookupOutcome;
use crate::version;

/// Result of a completed lookup
#[derive(Debug)]
pub struct LookupReport {
    /// What the makefile declares for the module
    pub outcome: LookupOutcome,
    /// The branch checked out before the run, and again after it
    pub original_branch: String,
    /// The remote-qualified ref the makefile was read from
    pub inspected_ref: String,
    /// Set when the scan succeeded but checking out `original_branch` failed
    pub restore_error: Option<CheckverError>,
}

/// Main lookup workflow
///
/// 1. Check the repository directory can be listed
/// 2. Record the current branch
/// 3. Check out `<remote>/<branch>`
/// 4. Locate the makefile and scan it for the module
/// 5. Check the recorded branch out again
///
/// # Returns
///
/// The report whenever the makefile was scanned, even if the restore then
/// failed; that failure is carried in [LookupReport::restore_error] so the
/// result can still be shown. On an earlier failure, that error; a restore
/// failure following it is logged rather than returned.
pub fn run_lookup<R: CommandRunner>(
    config: &SiteConfig,
    repo: &SiteRepo<R>,
) -> Result<LookupReport> {
    makefile::ensure_readable(repo.path())?;

    let original_branch = repo.current_branch()?;
    let inspected_ref = upstream_ref(&config.remote, &config.branch);
    debug!(%original_branch, %inspected_ref, "switching branch");

    repo.checkout(&inspected_ref)?;
    info!(%inspected_ref, "branch switched");

    let scanned = inspect(config, repo);

    debug!(%original_branch, "restoring branch");
    let restored = repo.checkout(&original_branch);

    match scanned {
        Ok(outcome) => {
            let restore_error = restored.err();
            if restore_error.is_none() {
                info!(%original_branch, "branch restored");
            }
            Ok(LookupReport {
                outcome,
                original_branch,
                inspected_ref,
                restore_error,
            })
        }
        Err(err) => {
            if let Err(restore_err) = restored {
                error!(
                    %original_branch,
                    error = %restore_err,
                    output = restore_err.command_output().unwrap_or_default(),
                    "could not restore original branch"
                );
            }
            Err(err)
        }
    }
}

/// Convenience wrapper that builds the [SiteRepo] from the config
pub fn run<R: CommandRunner>(config: &SiteConfig, runner: R) -> Result<LookupReport> {
    let repo = SiteRepo::new(config.repo_path.clone(), runner);
    run_lookup(config, &repo)
}

fn inspect<R: CommandRunner>(config: &SiteConfig, repo: &SiteRepo<R>) -> Result<LookupOutcome> {
    let path = makefile::locate_makefile(repo.path(), &config.makefile)?;
    let found = version::extract_module_version(&path, &config.module)?;
    Ok(LookupOutcome::from_scan(&config.module, found))
}
