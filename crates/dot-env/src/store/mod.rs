//! Parsed key/value store with fallback to the process environment.
//!
//! Responsibilities:
//! - Hold the values parsed from env files in a process-local map.
//! - Decide, per parsed key, whether it is injected into the backend environment.
//! - Resolve lookups from the local map first, then from the backend.
//!
//! Does NOT handle:
//! - Line syntax (see `parser`) or locating files (see `locator`).
//! - Removing variables from the backend; injection only adds or overwrites.
//!
//! Invariants:
//! - Within one load, the last valid line for a key wins in the local map.
//! - Lookups never mutate the local map.
//! - An empty backend value counts as absent both when loading and when looking up.

mod load;
mod report;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

pub use report::LoadReport;

use crate::backend::{EnvironmentBackend, SystemEnvironment};
use crate::codec::{self, Numeric};
use crate::error::EnvError;

/// Values loaded from env files, layered over an environment backend.
#[derive(Debug)]
pub struct EnvStore<B = SystemEnvironment> {
    vars: HashMap<String, String>,
    backend: B,
}

impl Default for EnvStore<SystemEnvironment> {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvStore<SystemEnvironment> {
    /// Create an empty store backed by the real process environment.
    pub fn new() -> Self {
        Self::with_backend(SystemEnvironment)
    }
}

impl<B: EnvironmentBackend> EnvStore<B> {
    /// Create an empty store over a custom backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            vars: HashMap::new(),
            backend,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Number of keys held in the local map.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Whether `key` was loaded from a file (the backend is not consulted).
    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Iterate over the locally loaded pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up `key` in the local map, falling back to the backend.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.vars.get(key) {
            Some(value) => Some(value.clone()),
            None => self.backend.lookup(key),
        }
    }

    /// Like [`get`](Self::get), but a missing key is an error.
    pub fn require(&self, key: &str) -> Result<String, EnvError> {
        self.get(key)
            .ok_or_else(|| EnvError::MissingEnvVar(key.to_string()))
    }

    /// Parse the value of `key` as `T` in host byte order.
    pub fn get_native<T: Numeric>(&self, key: &str) -> Option<T> {
        codec::parse_numeric(&self.get(key)?)
    }

    /// Parse the value of `key` as `T`, byte-swapped unless the host is little-endian.
    pub fn get_little_endian<T: Numeric>(&self, key: &str) -> Option<T> {
        self.get_native::<T>(key).map(codec::to_little_endian)
    }

    /// Parse the value of `key` as `T`, byte-swapped unless the host is big-endian.
    pub fn get_big_endian<T: Numeric>(&self, key: &str) -> Option<T> {
        self.get_native::<T>(key).map(codec::to_big_endian)
    }

    /// Parse a required value as `T` in host byte order.
    ///
    /// # Errors
    ///
    /// - `EnvError::MissingEnvVar` if `key` is absent everywhere.
    /// - `EnvError::InvalidValue` if the value does not parse as `T`.
    pub fn require_native<T: Numeric>(&self, key: &str) -> Result<T, EnvError> {
        let value = self.require(key)?;
        codec::parse_numeric(&value).ok_or_else(|| EnvError::InvalidValue {
            var: key.to_string(),
            message: format!("must be a valid {}", std::any::type_name::<T>()),
        })
    }
}
