//! Numeric decoding of textual values with explicit byte-order control.
//!
//! Responsibilities:
//! - Parse a whole (trimmed) value into a primitive integer or float.
//! - Re-order the in-memory bytes of a parsed value for little/big-endian callers.
//!
//! Invariants:
//! - Parsing is locale-independent and must consume the entire trimmed value.
//! - A leading `+` is not a valid sign.
//! - Byte swapping acts on the bit pattern, so for floats the result is the
//!   float whose IEEE-754 bytes are reversed, not a numeric conversion.

use std::str::FromStr;

use crate::constants::TRIM_CHARS;

/// Primitive arithmetic type that can be parsed from text and byte-swapped.
pub trait Numeric: FromStr + Copy {
    /// Reverse the bytes of the in-memory representation.
    fn swap_bytes(self) -> Self;
}

macro_rules! impl_numeric_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn swap_bytes(self) -> Self {
                    <$ty>::swap_bytes(self)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Numeric for f32 {
    #[inline]
    fn swap_bytes(self) -> Self {
        f32::from_bits(self.to_bits().swap_bytes())
    }
}

impl Numeric for f64 {
    #[inline]
    fn swap_bytes(self) -> Self {
        f64::from_bits(self.to_bits().swap_bytes())
    }
}

/// Parse `text` as `T`, or `None` if any part of the trimmed text is not consumed.
///
/// A leading `+` is rejected; only `-` may sign a number. Float spellings such
/// as `inf` and `NaN` are accepted.
pub fn parse_numeric<T: Numeric>(text: &str) -> Option<T> {
    let text = text.trim_matches(TRIM_CHARS);
    if text.starts_with('+') {
        return None;
    }
    text.parse().ok()
}

/// Returns `value` as it would read from little-endian storage on this host.
#[inline]
pub fn to_little_endian<T: Numeric>(value: T) -> T {
    if cfg!(target_endian = "little") {
        value
    } else {
        value.swap_bytes()
    }
}

/// Returns `value` as it would read from big-endian storage on this host.
#[inline]
pub fn to_big_endian<T: Numeric>(value: T) -> T {
    if cfg!(target_endian = "big") {
        value
    } else {
        value.swap_bytes()
    }
}
