use std::fmt;

use crate::version::ModuleVersion;

/// What a lookup found for the requested module.
///
/// Not finding the module is an ordinary result, not an error: the run still
/// restores the original branch and exits successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The makefile pins the module to a branch or tag
    Found(ModuleVersion),
    /// No branch/tag declaration was found for the module
    ModuleNotFound { module: String },
}

impl LookupOutcome {
    pub fn from_scan(module: &str, found: Option<ModuleVersion>) -> Self {
        match found {
            Some(version) => LookupOutcome::Found(version),
            None => LookupOutcome::ModuleNotFound {
                module: module.to_string(),
            },
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Found(version) => write!(
                f,
                "[{}] Current {}: {}",
                version.module, version.kind, version.value
            ),
            LookupOutcome::ModuleNotFound { module } => {
                write!(f, "Module not found: {}", module)
            }
        }
    }
}
