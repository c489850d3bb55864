//! ASCII case-insensitive string comparison.

/// Returns `true` when `a` and `b` are equal after ASCII case folding.
///
/// Non-ASCII bytes must match exactly.
pub fn equals_case_insensitive(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes()
        .zip(b.bytes())
        .all(|(lhs, rhs)| lhs.to_ascii_lowercase() == rhs.to_ascii_lowercase())
}
