//! Tests for the env store.
//!
//! Responsibilities:
//! - Test directory-scanning loads, including the disable switch.
//! - Test the merge policy between file values and the backend environment.
//! - Test accessor precedence, required lookups and numeric accessors.
//! - Test that diagnostics are logged without leaking values.
//!
//! Invariants:
//! - Tests that touch the working directory or the real environment take
//!   `env_lock()` and run under `serial_test`.
//! - Everything else uses `InMemoryEnvironment` and needs no locking.

use std::sync::Mutex;

use crate::backend::InMemoryEnvironment;
use crate::store::EnvStore;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Store over an in-memory backend seeded with `vars`.
pub fn fake_store<const N: usize>(vars: [(&str, &str); N]) -> EnvStore<InMemoryEnvironment> {
    EnvStore::with_backend(vars.into_iter().collect())
}
