//! Lexicon loading
//!
//! A lexicon is the reference word list tokens are checked against. It is read
//! once from a newline-delimited list and never mutated afterwards, so a single
//! instance can be shared by every document in a run.

use rustc_hash::FxHashSet;

/// Set of known lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
}

impl Lexicon {
    /// Parse a newline-delimited word list.
    ///
    /// Entries are case-insensitive: each line is trimmed and lowercased. Blank
    /// lines are skipped, which also makes CRLF files and trailing newlines
    /// harmless.
    pub fn from_text(text: &str) -> Self {
        text.lines().collect()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_is_case_insensitive() {
        let lexicon = Lexicon::from_text("Apple\nBANANA\ncherry\n");
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("apple"));
        assert!(lexicon.contains("banana"));
        assert!(!lexicon.contains("Apple"));
    }

    #[test]
    fn test_from_text_handles_crlf_and_blank_lines() {
        let lexicon = Lexicon::from_text("one\r\n\r\ntwo\r\n   \nthree");
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("one"));
        assert!(lexicon.contains("two"));
        assert!(lexicon.contains("three"));
        assert!(!lexicon.contains(""));
    }

    #[test]
    fn test_duplicate_entries_collapse() {
        let lexicon: Lexicon = ["word", "Word", "WORD"].into_iter().collect();
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::from_text("");
        assert!(lexicon.is_empty());
    }
}
