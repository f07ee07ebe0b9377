//! Text normalization for filename matching

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a string for matching
///
/// Strips diacritics via NFKD first, then lowercases, folds typographic
/// apostrophes and backticks to `'`, turns `-` and `_` into spaces and trims.
/// Compatibility forms such as `ℌ` or `﹣` decompose before folding, so the
/// result is a fixed point.
pub fn normalize(s: &str) -> String {
    let decomposed: String = s.nfkd().filter(|c| !is_combining_mark(*c)).collect();

    let folded: String = decomposed
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '`' => '\'',
            '-' | '_' => ' ',
            other => other,
        })
        .collect();

    folded.trim().to_string()
}
