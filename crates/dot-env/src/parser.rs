//! Line-oriented parser for `.env` content.
//!
//! Responsibilities:
//! - Classify each line as blank, comment, assignment or invalid.
//! - Split assignments on the first `=`, trim both halves and strip one pair of
//!   surrounding double quotes from the value.
//!
//! Does NOT handle:
//! - Storing values or touching the process environment (see `store`).
//! - Escape sequences, interpolation, inline comments or multi-line values.
//!
//! Invariants:
//! - An assignment always has a non-empty key and a non-empty value.
//! - Invalid lines never abort parsing of the lines that follow.

use std::io::{self, BufRead};

use thiserror::Error;

use crate::constants::{COMMENT_PREFIX, KEY_VALUE_SEPARATOR, QUOTE_CHAR, TRIM_CHARS};

/// Why a line was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("missing '=' separator")]
    MissingSeparator,

    #[error("empty key")]
    EmptyKey,

    #[error("empty value")]
    EmptyValue,

    #[error("line is not valid UTF-8")]
    NotUtf8,
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    Blank,
    Comment,
    Assignment { key: &'a str, value: &'a str },
    Invalid(InvalidReason),
}

/// Parse one raw line (with or without its trailing newline).
pub fn parse_line(raw: &str) -> ParsedLine<'_> {
    let line = raw.trim_matches(TRIM_CHARS);
    if line.is_empty() {
        return ParsedLine::Blank;
    }
    if line.starts_with(COMMENT_PREFIX) {
        return ParsedLine::Comment;
    }

    let Some((key, value)) = line.split_once(KEY_VALUE_SEPARATOR) else {
        return ParsedLine::Invalid(InvalidReason::MissingSeparator);
    };

    let key = key.trim_matches(TRIM_CHARS);
    let value = unquote(value.trim_matches(TRIM_CHARS));

    if key.is_empty() {
        ParsedLine::Invalid(InvalidReason::EmptyKey)
    } else if value.is_empty() {
        ParsedLine::Invalid(InvalidReason::EmptyValue)
    } else {
        ParsedLine::Assignment { key, value }
    }
}

/// Strip exactly one double quote from each end when both ends carry one.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix(QUOTE_CHAR)
        .and_then(|inner| inner.strip_suffix(QUOTE_CHAR))
        .unwrap_or(value)
}

/// Parse in-memory content, yielding 1-based line numbers with each outcome.
pub fn parse_str(content: &str) -> impl Iterator<Item = (usize, ParsedLine<'_>)> {
    content
        .split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, parse_line(line)))
}

/// Parse `reader` line by line, handing each outcome to `visit`.
///
/// Lines that are not valid UTF-8 are reported as [`InvalidReason::NotUtf8`].
/// An I/O error stops the scan; lines visited before it stay visited.
pub fn parse_reader<R, F>(mut reader: R, mut visit: F) -> io::Result<()>
where
    R: BufRead,
    F: FnMut(usize, ParsedLine<'_>),
{
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        line_number += 1;

        match std::str::from_utf8(&buf) {
            Ok(line) => visit(line_number, parse_line(line)),
            Err(_) => visit(line_number, ParsedLine::Invalid(InvalidReason::NotUtf8)),
        }
    }
}
