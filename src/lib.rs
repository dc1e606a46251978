pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod makefile;
pub mod outcome;
pub mod ui;
pub mod version;

pub use error::{CheckverError, Result};
