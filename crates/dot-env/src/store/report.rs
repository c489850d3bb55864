//! Summary of a single load call.

use std::io::ErrorKind;
use std::path::PathBuf;

/// What a load call did. Values are never recorded, only key names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// File that was read. Empty for in-memory content.
    pub path: PathBuf,
    /// Valid assignments stored in the local map, duplicates included.
    pub entries: usize,
    /// Keys written to the backend environment.
    pub injected: Vec<String>,
    /// Keys whose existing backend value was left in place.
    pub preserved: Vec<String>,
    /// Keys that replaced an earlier value in the local map.
    pub overwritten: Vec<String>,
    /// 1-based numbers of lines that were reported and skipped.
    pub invalid_lines: Vec<usize>,
    /// Set when the file could not be opened or reading stopped early.
    pub read_error: Option<ErrorKind>,
}

impl LoadReport {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// `true` when every line was valid and the file was read to the end.
    pub fn is_clean(&self) -> bool {
        self.invalid_lines.is_empty() && self.read_error.is_none()
    }
}
