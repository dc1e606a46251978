use crate::error::{CheckverError, Result};
use crate::git::CommandRunner;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Qualifies a branch with its remote, e.g. `origin/master`
pub fn upstream_ref(remote: &str, branch: &str) -> String {
    format!("{}/{}", remote, branch)
}

/// The site repository, driven through a [CommandRunner]
pub struct SiteRepo<R> {
    path: PathBuf,
    runner: R,
}

impl<R: CommandRunner> SiteRepo<R> {
    pub fn new(path: impl Into<PathBuf>, runner: R) -> Self {
        SiteRepo {
            path: path.into(),
            runner,
        }
    }

    /// Working directory every git command runs in
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the currently checked-out ref (`git rev-parse --abbrev-ref HEAD`)
    ///
    /// Surrounding whitespace and newlines are trimmed. A detached checkout
    /// reports `HEAD`.
    pub fn current_branch(&self) -> Result<String> {
        let output = self.git(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.trim().to_string())
    }

    /// Check out `reference`, which may be a local branch or a remote-qualified ref
    pub fn checkout(&self, reference: &str) -> Result<()> {
        self.git(&["checkout", reference])?;
        Ok(())
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, dir = %self.path.display(), "running git");

        let output = self.runner.execute("git", args, &self.path)?;
        if !output.success {
            debug!(%command, code = ?output.code, "git exited unsuccessfully");
            return Err(CheckverError::CommandFailed {
                command,
                output: output.combined,
            });
        }

        Ok(output.combined)
    }
}
