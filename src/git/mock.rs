use crate::error::Result;
use crate::git::{CommandOutput, CommandRunner};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// One recorded call to [MockRunner::execute]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

/// Mock runner for testing without spawning git
///
/// Tracks a single checked-out ref: `rev-parse --abbrev-ref HEAD` reports it and
/// `checkout <ref>` replaces it. Argument lists registered with
/// [MockRunner::fail_on] exit non-zero with the given output and leave the ref
/// untouched. Anything else succeeds silently.
pub struct MockRunner {
    head: Mutex<String>,
    failures: HashMap<String, String>,
    calls: Mutex<Vec<Invocation>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockRunner {
    /// Create a mock repository with `head` checked out
    pub fn new(head: impl Into<String>) -> Self {
        MockRunner {
            head: Mutex::new(head.into()),
            failures: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make the git invocation with exactly these arguments fail
    pub fn fail_on(&mut self, args: &[&str], output: impl Into<String>) {
        self.failures.insert(args.join(" "), output.into());
    }

    /// The ref currently checked out
    pub fn head(&self) -> String {
        lock(&self.head).trim().to_string()
    }

    /// All invocations so far, oldest first
    pub fn calls(&self) -> Vec<Invocation> {
        lock(&self.calls).clone()
    }

    /// Refs passed to `checkout`, oldest first
    pub fn checkouts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.args.first().map(String::as_str) == Some("checkout"))
            .filter_map(|call| call.args.get(1).cloned())
            .collect()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new("master")
    }
}

impl CommandRunner for MockRunner {
    fn execute(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<CommandOutput> {
        lock(&self.calls).push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            working_dir: working_dir.to_path_buf(),
        });

        if let Some(output) = self.failures.get(&args.join(" ")) {
            return Ok(CommandOutput::failed(output.clone()));
        }

        match args {
            ["rev-parse", "--abbrev-ref", "HEAD"] => {
                Ok(CommandOutput::ok(format!("{}\n", lock(&self.head))))
            }
            ["checkout", reference] => {
                *lock(&self.head) = reference.to_string();
                Ok(CommandOutput::ok(""))
            }
            _ => Ok(CommandOutput::ok("")),
        }
    }
}
