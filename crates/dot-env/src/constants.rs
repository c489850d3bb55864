//! Centralized constants for `.env` loading.
//!
//! This module contains the defaults shared by the locator, the line parser
//! and the store so the file format rules live in one place.

// =============================================================================
// File Format
// =============================================================================

/// File name searched for when a load call does not name one.
pub const DEFAULT_ENV_FILENAME: &str = ".env";

/// Characters stripped from both ends of a line, a key and a value.
pub const TRIM_CHARS: &[char] = &[' ', '\t', '\r', '\n'];

/// Marker that turns a whole line into a comment when it is the first character.
pub const COMMENT_PREFIX: char = '#';

/// Separator between key and value. Only the first occurrence splits.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Quote character stripped (one from each end) around a value.
pub const QUOTE_CHAR: char = '"';

// =============================================================================
// Merge Policy
// =============================================================================

/// Default override policy, fixed at build time by the `override-system` feature.
///
/// When `true`, values read from a file replace variables that already exist in
/// the process environment unless the load call says otherwise.
pub const OVERRIDE_SYSTEM_DEFAULT: bool = cfg!(feature = "override-system");

// =============================================================================
// Runtime Switches
// =============================================================================

/// Environment variable that suppresses directory-scanning loads when set to
/// `1` or `true` (any ASCII case).
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
