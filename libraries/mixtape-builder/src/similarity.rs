//! Similarity scoring between normalized strings

use std::collections::HashSet;

/// Score how alike two strings are, in `[0, 1]`
///
/// Identical strings score 1.0. When one contains the other the score lies in
/// `(0.9, 1.0]`, scaled by the length ratio. Anything else falls back to the
/// Jaccard index of the two character sets.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a.contains(b) || b.contains(a) {
        let len_a = a.chars().count();
        let len_b = b.chars().count();
        let (short, long) = if len_a <= len_b { (len_a, len_b) } else { (len_b, len_a) };
        return 0.9 + (short as f64 / long as f64) * 0.1;
    }

    let set_a: HashSet<char> = a.chars().collect();
    let set_b: HashSet<char> = b.chars().collect();
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union as f64
}
