//! Loading env files into an `EnvStore` and injecting into the backend.
//!
//! Invariants / Assumptions:
//! - Override policy resolves as: explicit argument, then the build-time
//!   default (`override-system` feature), then "do not override".
//! - A variable counts as already present only if its backend value is non-empty.
//! - Every line checks the backend afresh, so a key repeated within one file
//!   keeps its first injected value unless override is on.
//! - Log records carry key names and line numbers, never values.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::{EnvStore, LoadReport};
use crate::backend::EnvironmentBackend;
use crate::compare::equals_case_insensitive;
use crate::constants::{DEFAULT_ENV_FILENAME, DOTENV_DISABLED_VAR, OVERRIDE_SYSTEM_DEFAULT};
use crate::locator;
use crate::parser::{self, ParsedLine};

/// Resolve the per-call override flag against the build-time default.
pub(crate) fn resolve_override(override_system: Option<bool>) -> bool {
    override_system.unwrap_or(OVERRIDE_SYSTEM_DEFAULT)
}

impl<B: EnvironmentBackend> EnvStore<B> {
    /// Load `.env` from the current directory with the default override policy.
    pub fn load_default(&mut self) -> bool {
        self.load(DEFAULT_ENV_FILENAME, None)
    }

    /// Load `filename` from the current directory.
    ///
    /// Returns `true` if the file was located. A located file that cannot be
    /// read still returns `true`; use [`load_with_report`](Self::load_with_report)
    /// to observe that case.
    ///
    /// Returns `false` without scanning when `DOTENV_DISABLED` is `1` or `true`
    /// in the backend environment, even if the file exists.
    pub fn load(&mut self, filename: &str, override_system: Option<bool>) -> bool {
        self.load_with_report(filename, override_system).is_some()
    }

    /// Load `filename` from the current directory and describe what happened.
    ///
    /// Returns `None` if the file was not found, the name is empty, or loading is
    /// switched off through `DOTENV_DISABLED`.
    pub fn load_with_report(
        &mut self,
        filename: &str,
        override_system: Option<bool>,
    ) -> Option<LoadReport> {
        if self.dotenv_disabled() {
            tracing::debug!(filename, "Skipping env file load: DOTENV_DISABLED is set");
            return None;
        }

        let path = locator::locate(filename)?;
        self.load_located(&path, override_system)
    }

    /// Load a file the locator already found. Always `Some`, even when the
    /// file cannot be opened.
    pub(crate) fn load_located(
        &mut self,
        path: &Path,
        override_system: Option<bool>,
    ) -> Option<LoadReport> {
        tracing::debug!(path = %path.display(), "Located env file");
        Some(self.load_path(path, override_system))
    }

    /// Load an explicit path without scanning the current directory.
    pub fn load_path(&mut self, path: &Path, override_system: Option<bool>) -> LoadReport {
        let mut report = LoadReport::new(path.to_path_buf());

        match File::open(path) {
            Ok(file) => self.ingest(BufReader::new(file), override_system, &mut report),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to open env file"
                );
                report.read_error = Some(e.kind());
            }
        }

        report
    }

    /// Load env-formatted text that is already in memory.
    pub fn load_str(&mut self, content: &str, override_system: Option<bool>) -> LoadReport {
        let mut report = LoadReport::new(PathBuf::new());
        self.ingest(content.as_bytes(), override_system, &mut report);
        report
    }

    fn dotenv_disabled(&self) -> bool {
        self.backend
            .lookup(DOTENV_DISABLED_VAR)
            .is_some_and(|value| value == "1" || equals_case_insensitive(&value, "true"))
    }

    fn ingest<R: BufRead>(
        &mut self,
        reader: R,
        override_system: Option<bool>,
        report: &mut LoadReport,
    ) {
        let override_existing = resolve_override(override_system);
        let mut seen = SeenKeys::default();

        let result = parser::parse_reader(reader, |line, parsed| match parsed {
            ParsedLine::Assignment { key, value } => {
                self.apply(key, value, override_existing, report, &mut seen);
            }
            ParsedLine::Invalid(reason) => {
                tracing::warn!(line, reason = %reason, "Invalid line in env file");
                report.invalid_lines.push(line);
            }
            ParsedLine::Blank | ParsedLine::Comment => {}
        });

        if let Err(e) = result {
            tracing::warn!(
                path = %report.path.display(),
                error = %e,
                "Failed to read env file; keeping entries read so far"
            );
            report.read_error = Some(e.kind());
        }
    }

    fn apply(
        &mut self,
        key: &str,
        value: &str,
        override_existing: bool,
        report: &mut LoadReport,
        seen: &mut SeenKeys,
    ) {
        report.entries += 1;

        if self.vars.insert(key.to_string(), value.to_string()).is_some() {
            tracing::warn!(key, "Duplicate env key, overwriting");
            report.overwritten.push(key.to_string());
        }

        let existing = self.backend.lookup(key).is_some();

        if existing && !override_existing {
            tracing::debug!(key, "Keeping existing environment value");
            if seen.preserved.insert(key.to_string()) {
                report.preserved.push(key.to_string());
            }
            return;
        }

        if self.backend.set(key, value) {
            tracing::debug!(key, replaced = existing, "Injected env var");
            if seen.injected.insert(key.to_string()) {
                report.injected.push(key.to_string());
            }
        }
    }
}

/// Keys already listed in a report, so repeated lines are recorded once.
#[derive(Default)]
struct SeenKeys {
    injected: HashSet<String>,
    preserved: HashSet<String>,
}
