use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for checkver operations
#[derive(Error, Debug)]
pub enum CheckverError {
    #[error("Command '{command}' failed. See output above for clues.")]
    CommandFailed { command: String, output: String },

    #[error("Could not run command '{}': {}", command, source)]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("There was a problem reading the site repo directory @ {}", path.display())]
    RepositoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not locate makefile @ '{}'", path.display())]
    MakefileNotFound { path: PathBuf },

    #[error("Could not read makefile @ '{}': {}", path.display(), source)]
    MakefileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid download pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in checkver
pub type Result<T> = std::result::Result<T, CheckverError>;

impl CheckverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CheckverError::Config(msg.into())
    }

    /// Captured output of the failed subprocess, if this error carries one
    pub fn command_output(&self) -> Option<&str> {
        match self {
            CheckverError::CommandFailed { output, .. } => Some(output.as_str()),
            _ => None,
        }
    }
}
