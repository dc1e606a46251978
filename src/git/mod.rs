//! Git operations over an external `git` binary
//!
//! Every git invocation goes through the [CommandRunner] trait, which takes the
//! working directory as an explicit argument instead of changing the process
//! working directory. The concrete implementations include:
//!
//! - [runner::SystemRunner]: spawns real processes via `std::process::Command`
//! - [mock::MockRunner]: an in-memory stand-in that tracks a checked-out ref
//!
//! [SiteRepo] layers the two git operations the lookup needs on top of a runner.
//!
//! ```rust
//! # use ncaa_checkver::git::{upstream_ref, CommandRunner, SiteRepo};
//! # fn example<R: CommandRunner>(repo: &SiteRepo<R>) -> ncaa_checkver::Result<()> {
//! let original = repo.current_branch()?;
//! repo.checkout(&upstream_ref("origin", "qa"))?;
//! repo.checkout(&original)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repo;
pub mod runner;

pub use mock::MockRunner;
pub use repo::{upstream_ref, SiteRepo};
pub use runner::SystemRunner;

use crate::error::Result;
use std::path::Path;

/// Result of a finished subprocess
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Whether the process exited with status zero
    pub success: bool,
    /// Exit code, if the process was not terminated by a signal
    pub code: Option<i32>,
    /// Standard output followed by standard error
    pub combined: String,
}

impl CommandOutput {
    /// A successful run that produced the given output
    pub fn ok(combined: impl Into<String>) -> Self {
        CommandOutput {
            success: true,
            code: Some(0),
            combined: combined.into(),
        }
    }

    /// A failed run with exit code 1 and the given output
    pub fn failed(combined: impl Into<String>) -> Self {
        CommandOutput {
            success: false,
            code: Some(1),
            combined: combined.into(),
        }
    }
}

/// Executes external commands in a given working directory
///
/// ## Error Handling
///
/// Implementations return `Err` only when the command could not be run at all
/// ([crate::error::CheckverError::CommandSpawn]). A command that ran and exited
/// non-zero is reported as `Ok` with `success == false`; callers decide what
/// that means.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, using `working_dir` as its current directory
    fn execute(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn execute(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<CommandOutput> {
        (**self).execute(program, args, working_dir)
    }
}
