use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{CheckverError, Result};

/// Matches a download declaration, capturing the kind and the ref it points at.
pub const DOWNLOAD_PATTERN: &str = r#"\[download\]\[(branch|tag)\] = "([A-Za-z0-9.\-_]+)""#;

/// Whether a module is pinned to a branch or to a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadKind {
    Branch,
    Tag,
}

impl DownloadKind {
    fn from_capture(s: &str) -> Option<Self> {
        match s {
            "branch" => Some(DownloadKind::Branch),
            "tag" => Some(DownloadKind::Tag),
            _ => None,
        }
    }
}

impl fmt::Display for DownloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadKind::Branch => write!(f, "branch"),
            DownloadKind::Tag => write!(f, "tag"),
        }
    }
}

/// The ref a module's download is declared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleVersion {
    pub module: String,
    pub kind: DownloadKind,
    pub value: String,
}

/// The substring that marks a line as a download declaration for `module`.
pub fn seek_marker(module: &str) -> String {
    format!("projects[{}][download]", module)
}

/// Scans makefile content for the download ref of `module`.
///
/// Every line containing [seek_marker] replaces the matches kept so far with
/// that line's own matches, so the last such line decides the result even when
/// it declares no branch or tag (a trailing `[download][url]` line, say).
///
/// Lines are split on raw bytes and decoded lossily, so stray non-UTF-8 bytes
/// elsewhere in the file do not stop the scan.
///
/// # Returns
/// * `Ok(Some(ModuleVersion))` - First branch/tag match on the last marked line
/// * `Ok(None)` - No marked line, or the last one held no branch/tag declaration
/// * `Err` - If a line cannot be read
pub fn scan<B: BufRead>(reader: B, module: &str) -> Result<Option<ModuleVersion>> {
    let pattern = Regex::new(DOWNLOAD_PATTERN)?;
    let marker = seek_marker(module);

    let mut matches: Vec<(String, String)> = Vec::new();
    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line = String::from_utf8_lossy(&raw);
        if !line.contains(&marker) {
            continue;
        }

        trace!(line = index + 1, "marker found");
        matches = pattern
            .captures_iter(&line)
            .filter_map(|caps| {
                let kind = caps.get(1)?.as_str().to_string();
                let value = caps.get(2)?.as_str().to_string();
                Some((kind, value))
            })
            .collect();
    }

    let found = matches.into_iter().next().and_then(|(kind, value)| {
        Some(ModuleVersion {
            module: module.to_string(),
            kind: DownloadKind::from_capture(&kind)?,
            value,
        })
    });
    Ok(found)
}

/// Opens the makefile at `path` and scans it for `module`.
///
/// Open and read failures surface as [CheckverError::MakefileUnreadable].
pub fn extract_module_version(path: &Path, module: &str) -> Result<Option<ModuleVersion>> {
    let unreadable = |source| CheckverError::MakefileUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let result = match scan(BufReader::new(file), module) {
        Err(CheckverError::Io(source)) => Err(unreadable(source)),
        other => other,
    };

    debug!(module, found = ?result.as_ref().ok().map(Option::is_some), "scanned makefile");
    result
}
