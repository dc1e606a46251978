use crate::error::{CheckverError, Result};
use crate::git::{CommandOutput, CommandRunner};
use std::path::Path;
use std::process::Command;

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| CheckverError::CommandSpawn {
                command: format!("{} {}", program, args.join(" ")),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            combined,
        })
    }
}
