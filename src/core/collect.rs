//! Glob expansion and file reads.
//!
//! Output order is deterministic: patterns in argument order, matches within
//! a pattern in the alphabetical order `glob` yields, and each path only at
//! its first position. Directories, vanished paths and invalid patterns are
//! dropped without failing the run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::unit::InputUnit;
use crate::error::{Error, Result};

/// Expand glob patterns into a deduplicated list of paths.
///
/// `**` matches any number of directory levels. A pattern without wildcards
/// yields itself when the path exists.
pub fn expand<S: AsRef<str>>(patterns: &[S]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let entries = match glob::glob(pattern) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(pattern, error = %e, "skipping invalid pattern");
                continue;
            }
        };

        for entry in entries {
            match entry {
                Ok(path) => {
                    if seen.insert(path.clone()) {
                        paths.push(path);
                    }
                }
                Err(e) => debug!(path = %e.path().display(), error = %e.error(), "unreadable entry"),
            }
        }
    }

    debug!(patterns = patterns.len(), matches = paths.len(), "expanded patterns");
    paths
}

/// Expand patterns and keep only existing non-directory paths.
///
/// Symlinks are followed; a symlink to a regular file is kept.
pub fn files<S: AsRef<str>>(patterns: &[S]) -> Vec<PathBuf> {
    expand(patterns).into_iter().filter(|p| is_file(p)).collect()
}

fn is_file(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            debug!(path = %path.display(), "skipping directory");
            false
        }
        Ok(_) => true,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unreadable path");
            false
        }
    }
}

/// Read a whole file into a unit labelled with its path.
///
/// # Errors
///
/// Returns `Error::ReadFile` with the path if the read fails.
pub fn read(path: &Path) -> Result<InputUnit> {
    let payload = std::fs::read(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = payload.len(), "read file");
    Ok(InputUnit::new(path.display().to_string(), payload))
}
