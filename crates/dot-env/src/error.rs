//! Error types for env lookups.
//!
//! Invariants:
//! - Not-found conditions are `Option::None`, never an error.
//! - Errors carry the variable name but never its value.

use thiserror::Error;

/// Errors surfaced to callers that ask for a required variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}
