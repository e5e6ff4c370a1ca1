//! Approximate string similarity used as a last-resort matcher.
//!
//! # Invariants
//! - Output is always within `[0, 1]`.
//! - Empty input on either side scores `0`, including `("", "")`.
//! - Lengths are measured in Unicode scalar values.

/// Scores how alike two normalized strings are.
///
/// - Exact equality scores `1`.
/// - When one string contains the other, scores `shorter / longer`.
/// - Otherwise scores the number of characters of `a` that occur anywhere in
///   `b`, divided by the longer length. Order-insensitive, not an edit
///   distance.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let longer = len_a.max(len_b) as f64;

    if a.contains(b) || b.contains(a) {
        return len_a.min(len_b) as f64 / longer;
    }

    let shared = a.chars().filter(|ch| b.contains(*ch)).count();
    shared as f64 / longer
}
