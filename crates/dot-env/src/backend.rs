//! Access to the real process environment behind a substitutable interface.
//!
//! Responsibilities:
//! - Define the `EnvironmentBackend` capability (lookup + set) used by the store.
//! - Provide `SystemEnvironment`, which delegates to `std::env`.
//! - Provide `InMemoryEnvironment`, a deterministic fake for tests and embedding.
//!
//! Does NOT handle:
//! - Deciding whether a value should be injected (see `store`).
//!
//! Invariants:
//! - An empty value is reported as absent by every backend.
//! - Backends only add or overwrite variables; nothing here removes one.

use std::cell::RefCell;
use std::collections::HashMap;

/// Read/write capability over a process-style environment.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site if the
/// store has to cross threads.
pub trait EnvironmentBackend {
    /// Returns the value of `name`, or `None` if it is unset, empty or not valid Unicode.
    fn lookup(&self, name: &str) -> Option<String>;

    /// Writes `name=value`, replacing any previous value.
    ///
    /// Returns `false` if the backend refused the pair.
    fn set(&self, name: &str, value: &str) -> bool;
}

/// Zero-sized type that delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    fn is_settable(name: &str, value: &str) -> bool {
        !name.is_empty() && !name.contains(['=', '\0']) && !value.contains('\0')
    }
}

impl EnvironmentBackend for SystemEnvironment {
    #[inline]
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }

    fn set(&self, name: &str, value: &str) -> bool {
        if !Self::is_settable(name, value) {
            tracing::warn!(
                key = %name,
                "Refusing to set environment variable containing '=' or NUL"
            );
            return false;
        }

        // SAFETY: the environment is process-global. Callers that load from more
        // than one thread must serialize loads themselves.
        unsafe {
            std::env::set_var(name, value);
        }
        true
    }
}

/// `HashMap`-backed environment that never touches the real process.
#[derive(Debug, Default)]
pub struct InMemoryEnvironment {
    vars: RefCell<HashMap<String, String>>,
}

impl InMemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored value, including empty strings.
    pub fn raw(&self, name: &str) -> Option<String> {
        self.vars.borrow().get(name).cloned()
    }

    /// Number of variables currently held, empty ones included.
    pub fn len(&self) -> usize {
        self.vars.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.borrow().is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: RefCell::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl EnvironmentBackend for InMemoryEnvironment {
    fn lookup(&self, name: &str) -> Option<String> {
        self.vars
            .borrow()
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    fn set(&self, name: &str, value: &str) -> bool {
        self.vars
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_system_lookup_treats_empty_as_absent() {
        let key = "_DOT_ENV_TEST_BACKEND_EMPTY";
        temp_env::with_vars([(key, Some(""))], || {
            assert_eq!(SystemEnvironment.lookup(key), None);
        });
        temp_env::with_vars([(key, Some("value"))], || {
            assert_eq!(SystemEnvironment.lookup(key), Some("value".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_system_set_writes_process_environment() {
        let key = "_DOT_ENV_TEST_BACKEND_SET";
        temp_env::with_vars([(key, None::<&str>)], || {
            assert!(SystemEnvironment.set(key, "written"));
            assert_eq!(std::env::var(key).unwrap(), "written");
        });
    }

    #[test]
    fn test_system_set_rejects_nul_and_separator() {
        assert!(!SystemEnvironment.set("BAD=NAME", "value"));
        assert!(!SystemEnvironment.set("BAD_VALUE", "a\0b"));
        assert!(!SystemEnvironment.set("", "value"));
    }

    #[test]
    fn test_in_memory_lookup_and_set() {
        let env: InMemoryEnvironment = [("EMPTY", ""), ("FULL", "1")].into_iter().collect();

        assert_eq!(env.lookup("EMPTY"), None);
        assert_eq!(env.raw("EMPTY"), Some(String::new()));
        assert_eq!(env.lookup("FULL"), Some("1".to_string()));
        assert_eq!(env.lookup("MISSING"), None);

        assert!(env.set("FULL", "2"));
        assert!(env.set("NEW", "3"));
        assert_eq!(env.lookup("FULL"), Some("2".to_string()));
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn test_generic_function_with_backend() {
        fn value_or_default<B: EnvironmentBackend>(env: &B, key: &str, default: &str) -> String {
            env.lookup(key).unwrap_or_else(|| default.to_string())
        }

        let env = InMemoryEnvironment::new();
        assert_eq!(value_or_default(&env, "NONEXISTENT_VAR_12345", "default"), "default");
        assert_eq!(
            value_or_default(&SystemEnvironment, "NONEXISTENT_VAR_12345", "default"),
            "default"
        );
    }
}
