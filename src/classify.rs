//! Token classification
//!
//! Every normalized token lands in exactly one [`Category`]. The checks run as a
//! strict priority chain and the first one that matches wins:
//!
//! 1. not a valid word       -> [`Category::Discard`]
//! 2. in the stopword set    -> [`Category::Stopword`]
//! 3. in the lexicon         -> [`Category::InLexicon`]
//! 4. anything else          -> [`Category::NotInLexicon`]
//!
//! A stopword that also appears in the lexicon is therefore a stopword.

use crate::lexicon::Lexicon;
use crate::stopwords::StopwordSet;
use crate::tokenizing::{is_valid_word, normalize, tokenize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Discard,
    Stopword,
    InLexicon,
    NotInLexicon,
}

impl Category {
    /// All categories in priority order.
    pub const ALL: [Category; 4] = [
        Category::Discard,
        Category::Stopword,
        Category::InLexicon,
        Category::NotInLexicon,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Discard => "discard",
            Category::Stopword => "stopword",
            Category::InLexicon => "in-lexicon",
            Category::NotInLexicon => "not-in-lexicon",
        };
        f.write_str(name)
    }
}

/// Classifies normalized tokens against a stopword set and a lexicon.
///
/// Borrows both sets; build them once and share them across documents.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    stopwords: &'a StopwordSet,
    lexicon: &'a Lexicon,
}

impl<'a> Classifier<'a> {
    pub fn new(stopwords: &'a StopwordSet, lexicon: &'a Lexicon) -> Self {
        Self { stopwords, lexicon }
    }

    /// Classify a token that has already been through [`normalize`].
    pub fn classify(&self, token: &str) -> Category {
        if !is_valid_word(token) {
            return Category::Discard;
        }
        if self.stopwords.contains(token) {
            return Category::Stopword;
        }
        if self.lexicon.contains(token) {
            return Category::InLexicon;
        }
        Category::NotInLexicon
    }

    /// Tokenize, normalize and classify a whole document.
    pub fn classify_text(&self, text: &str) -> ClassifiedTokens {
        let mut classified = ClassifiedTokens::default();
        for raw in tokenize(text) {
            let token = normalize(raw);
            let category = self.classify(&token);
            classified.push(category, token);
        }
        classified
    }
}

/// Normalized tokens of one document, bucketed by category.
///
/// Each list keeps document order and repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedTokens {
    pub discards: Vec<String>,
    pub stopwords: Vec<String>,
    pub in_lexicon: Vec<String>,
    pub not_in_lexicon: Vec<String>,
}

impl ClassifiedTokens {
    pub fn push(&mut self, category: Category, token: String) {
        self.list_mut(category).push(token);
    }

    pub fn list(&self, category: Category) -> &[String] {
        match category {
            Category::Discard => &self.discards,
            Category::Stopword => &self.stopwords,
            Category::InLexicon => &self.in_lexicon,
            Category::NotInLexicon => &self.not_in_lexicon,
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Discard => &mut self.discards,
            Category::Stopword => &mut self.stopwords,
            Category::InLexicon => &mut self.in_lexicon,
            Category::NotInLexicon => &mut self.not_in_lexicon,
        }
    }

    /// Total number of tokens across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.list(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn fixtures() -> (StopwordSet, Lexicon) {
        let stopwords = StopwordSet::english();
        // "the" is deliberately in both sets
        let lexicon = Lexicon::from_text("apple\napple's\nbanana\nthe\nxyz\n");
        (stopwords, lexicon)
    }

    #[rstest]
    #[case("", Category::Discard)]
    #[case("nth", Category::Discard)]
    #[case("x2y", Category::Discard)]
    #[case("the", Category::Stopword)]
    #[case("don't", Category::Stopword)]
    #[case("apple", Category::InLexicon)]
    #[case("apple's", Category::InLexicon)]
    #[case("xyz", Category::InLexicon)]
    #[case("durian", Category::NotInLexicon)]
    fn test_classify(#[case] token: &str, #[case] expected: Category) {
        let (stopwords, lexicon) = fixtures();
        let classifier = Classifier::new(&stopwords, &lexicon);
        assert_eq!(classifier.classify(token), expected);
    }

    #[test]
    fn test_stopword_wins_over_lexicon() {
        let (stopwords, lexicon) = fixtures();
        assert!(lexicon.contains("the"));
        let classifier = Classifier::new(&stopwords, &lexicon);
        assert_eq!(classifier.classify("the"), Category::Stopword);
    }

    #[test]
    fn test_validity_gates_stopwords() {
        // "s" and "t" are stopwords but have no vowel
        let (stopwords, lexicon) = fixtures();
        let classifier = Classifier::new(&stopwords, &lexicon);
        assert_eq!(classifier.classify("s"), Category::Discard);
        assert_eq!(classifier.classify("t"), Category::Discard);
    }

    #[test]
    fn test_classify_text_pipeline() {
        let (stopwords, lexicon) = fixtures();
        let classifier = Classifier::new(&stopwords, &lexicon);
        let classified = classifier.classify_text("The Apple's price-tag: 123 apples, and XYZ!");

        assert_eq!(classified.stopwords, vec!["the", "and"]);
        assert_eq!(classified.in_lexicon, vec!["apple's", "xyz"]);
        assert_eq!(classified.not_in_lexicon, vec!["price", "tag", "apples"]);
        assert_eq!(classified.discards, vec![""]);
        assert_eq!(classified.len(), 8);
    }

    #[test]
    fn test_classify_text_empty_document() {
        let (stopwords, lexicon) = fixtures();
        let classifier = Classifier::new(&stopwords, &lexicon);
        assert!(classifier.classify_text(" -- \n").is_empty());
    }

    proptest! {
        #[test]
        fn test_every_token_lands_in_exactly_one_list(text in "\\PC{0,80}") {
            let (stopwords, lexicon) = fixtures();
            let classifier = Classifier::new(&stopwords, &lexicon);
            let classified = classifier.classify_text(&text);
            prop_assert_eq!(classified.len(), tokenize(&text).len());
            for category in Category::ALL {
                for token in classified.list(category) {
                    prop_assert_eq!(classifier.classify(token), category);
                }
            }
        }
    }
}
