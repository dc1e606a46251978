use std::path::PathBuf;

use crate::error::{CheckverError, Result};

/// Environment variable overriding the site repository path.
pub const ENV_SITE_REPO: &str = "NCAA_BARCA_SITE_REPO_PATH";
/// Environment variable overriding the makefile filename.
pub const ENV_SITE_MAKEFILE: &str = "NCAA_BARCA_SITE_MAKEFILE";
/// Environment variable overriding the branch to inspect.
pub const ENV_SITE_BRANCH: &str = "NCAA_BARCA_SITE_BRANCH";

/// Repository location relative to the user's home directory.
pub const DEFAULT_REPO_SUBDIR: &str = "Repos/ncaa-barcelona";
pub const DEFAULT_MAKEFILE: &str = "barcelona.make";
pub const DEFAULT_BRANCH: &str = "master";
pub const DEFAULT_REMOTE: &str = "origin";

/// Values supplied explicitly on the command line.
///
/// `None` means the flag was not given, which is the only case in which the
/// environment is consulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteOverrides {
    pub repo_path: Option<PathBuf>,
    pub makefile: Option<String>,
    pub branch: Option<String>,
    pub remote: Option<String>,
    pub module: Option<String>,
}

/// Fully resolved settings for one lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub repo_path: PathBuf,
    pub makefile: String,
    pub branch: String,
    pub remote: String,
    pub module: String,
}

/// Returns the default site repository path under the given home directory.
pub fn default_repo_path(home: impl Into<PathBuf>) -> PathBuf {
    home.into().join(DEFAULT_REPO_SUBDIR)
}

impl SiteConfig {
    /// Resolves settings from flags, then the process environment, then defaults.
    pub fn resolve(overrides: SiteOverrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok(), dirs::home_dir())
    }

    /// Resolves settings with an injected environment lookup and home directory.
    ///
    /// Priority per setting: explicit flag, else a non-empty environment
    /// variable, else the built-in default. The module has no default and is
    /// left empty when not supplied.
    ///
    /// # Returns
    /// * `Ok(SiteConfig)` - Resolved settings
    /// * `Err` - If the repo path falls back to its default and no home directory is known
    pub fn resolve_with<F>(overrides: SiteOverrides, env: F, home: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|value| !value.is_empty());

        let repo_path = match overrides.repo_path {
            Some(path) => path,
            None => match lookup(ENV_SITE_REPO) {
                Some(path) => PathBuf::from(path),
                None => home.map(default_repo_path).ok_or_else(|| {
                    CheckverError::config(format!(
                        "cannot determine home directory; pass --site-repo or set {}",
                        ENV_SITE_REPO
                    ))
                })?,
            },
        };

        let makefile = overrides
            .makefile
            .or_else(|| lookup(ENV_SITE_MAKEFILE))
            .unwrap_or_else(|| DEFAULT_MAKEFILE.to_string());

        let branch = overrides
            .branch
            .or_else(|| lookup(ENV_SITE_BRANCH))
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string());

        let remote = overrides
            .remote
            .unwrap_or_else(|| DEFAULT_REMOTE.to_string());

        Ok(SiteConfig {
            repo_path,
            makefile,
            branch,
            remote,
            module: overrides.module.unwrap_or_default(),
        })
    }
}
