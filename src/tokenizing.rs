//! Tokenization and token normalization
//!
//! Tokens are produced in three steps:
//!
//! 1. [`tokenize`] splits the raw text on runs of whitespace or hyphens.
//! 2. [`normalize`] lowercases a token and trims non-letters from both ends.
//! 3. [`is_valid_word`] decides whether a normalized token is worth classifying.
//!
//! Only ASCII `a-z` count as letters for trimming and validity. Anything else
//! (digits, punctuation, accented letters) is trimmed from the edges and makes a
//! token invalid if it survives in the middle.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+|-+").unwrap());
static WORD_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z']+$").unwrap());
static VOWEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]").unwrap());

/// Split text into candidate tokens on whitespace and hyphen runs.
///
/// Empty pieces produced by leading or trailing separators are dropped, so the
/// result never contains an empty string.
pub fn tokenize(text: &str) -> Vec<&str> {
    SEPARATOR
        .split(text)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Lowercase a token and strip leading and trailing non-`[a-z]` characters.
///
/// The result may be empty, e.g. for `"123"` or `"--"`.
pub fn normalize(token: &str) -> String {
    let lowered = token.to_lowercase();
    lowered
        .trim_start_matches(|c: char| !c.is_ascii_lowercase())
        .trim_end_matches(|c: char| !c.is_ascii_lowercase())
        .to_string()
}

/// A word is made of `a-z` and apostrophes only and has a vowel or `y`.
pub fn is_valid_word(token: &str) -> bool {
    WORD_CHARS.is_match(token) && VOWEL.is_match(token)
}
