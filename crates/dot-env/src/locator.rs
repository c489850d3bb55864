//! Non-recursive lookup of an env file in a directory.
//!
//! Invariants:
//! - Only the directory itself is scanned, never its subdirectories.
//! - File names are compared exactly (case-sensitive).
//! - An empty file name, a missing match, or an unreadable directory are all
//!   "not found" rather than errors.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Scan the current working directory for a regular file named `filename`.
pub fn locate(filename: &str) -> Option<PathBuf> {
    match std::env::current_dir() {
        Ok(cwd) => locate_in(&cwd, filename),
        Err(e) => {
            tracing::warn!(error = %e, "Could not determine current directory");
            None
        }
    }
}

/// Scan `dir` for a regular file named `filename`.
///
/// The first match in directory iteration order wins. Symlinks are followed
/// when deciding whether an entry is a regular file.
pub fn locate_in(dir: &Path, filename: &str) -> Option<PathBuf> {
    if filename.is_empty() {
        return None;
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "Could not read directory while looking for env file"
            );
            return None;
        }
    };

    let wanted = OsStr::new(filename);
    entries
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.file_name() == Some(wanted) && path.is_file())
}
