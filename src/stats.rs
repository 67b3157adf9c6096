//! Aggregation of classified tokens into statistics and scores
//!
//! A [`StatisticsRecord`] carries two independent dimensions:
//!
//! - `count`: number of distinct token strings per category
//! - `freq`: number of token occurrences per category
//!
//! [`CoverageScores`] are derived from the record. Any percentage whose
//! denominator is zero comes out as [`Score::Undefined`] rather than a NaN or a
//! division fault. A document without eligible (lexicon-checked) tokens has all
//! of its scores undefined, even when discards keep a coverage denominator
//! above zero.

use crate::classify::{Category, ClassifiedTokens};
use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};

/// A percentage in `[0, 100]`, or undefined when the denominator was zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    Defined(f64),
    Undefined,
}

impl Score {
    /// `100 * numerator / denominator`, undefined on a zero denominator.
    pub fn percentage(numerator: usize, denominator: usize) -> Self {
        if denominator == 0 {
            Score::Undefined
        } else {
            Score::Defined(100.0 * numerator as f64 / denominator as f64)
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Score::Defined(_))
    }
}

// Undefined scores serialize as null
impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Score::Defined(v) => serializer.serialize_some(v),
            Score::Undefined => serializer.serialize_none(),
        }
    }
}

/// One dimension of a statistics record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub lex: usize,
    pub notlex: usize,
    pub stop: usize,
    pub disc: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Discard => self.disc,
            Category::Stopword => self.stop,
            Category::InLexicon => self.lex,
            Category::NotInLexicon => self.notlex,
        }
    }

    fn set(&mut self, category: Category, value: usize) {
        match category {
            Category::Discard => self.disc = value,
            Category::Stopword => self.stop = value,
            Category::InLexicon => self.lex = value,
            Category::NotInLexicon => self.notlex = value,
        }
    }

    /// Sum of the four categories.
    pub fn total(&self) -> usize {
        self.lex + self.notlex + self.stop + self.disc
    }

    /// Tokens that are valid and not stopwords.
    pub fn eligible(&self) -> usize {
        self.lex + self.notlex
    }

    /// Share of `category` in this dimension's total.
    pub fn share(&self, category: Category) -> Score {
        Score::percentage(self.get(category), self.total())
    }
}

/// Per-document aggregate over both dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatisticsRecord {
    /// Unique token counts.
    pub count: CategoryCounts,
    /// Raw token frequencies.
    pub freq: CategoryCounts,
}

impl StatisticsRecord {
    pub fn from_classified(tokens: &ClassifiedTokens) -> Self {
        let mut record = StatisticsRecord::default();
        for category in Category::ALL {
            let list = tokens.list(category);
            let unique: FxHashSet<&str> = list.iter().map(String::as_str).collect();
            record.count.set(category, unique.len());
            record.freq.set(category, list.len());
        }
        record
    }

    pub fn scores(&self) -> CoverageScores {
        CoverageScores::from_record(self)
    }
}

// Totals are derived, but serialized alongside the categories for readers
impl Serialize for StatisticsRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        #[derive(Serialize)]
        struct Dimension<'a> {
            #[serde(flatten)]
            counts: &'a CategoryCounts,
            tot: usize,
        }

        let mut state = serializer.serialize_struct("StatisticsRecord", 2)?;
        state.serialize_field(
            "cnt",
            &Dimension {
                counts: &self.count,
                tot: self.count.total(),
            },
        )?;
        state.serialize_field(
            "frq",
            &Dimension {
                counts: &self.freq,
                tot: self.freq.total(),
            },
        )?;
        state.end()
    }
}

/// Derived percentages for one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageScores {
    /// Share of eligible unique tokens found in the lexicon.
    pub score_by_count: Score,
    /// Share of eligible token occurrences found in the lexicon.
    pub score_by_freq: Score,
    /// Share of non-stopword unique tokens that are eligible. Undefined when
    /// none are.
    pub coverage_by_count: Score,
    /// Share of non-stopword token occurrences that are eligible.
    pub coverage_by_freq: Score,
}

/// Eligible share of the non-stopword tokens. Undefined with nothing eligible,
/// so a discards-only document does not read as 0% coverage.
fn coverage(counts: &CategoryCounts) -> Score {
    if counts.eligible() == 0 {
        return Score::Undefined;
    }
    Score::percentage(counts.eligible(), counts.total() - counts.stop)
}

impl CoverageScores {
    pub fn from_record(record: &StatisticsRecord) -> Self {
        let (cnt, frq) = (&record.count, &record.freq);
        Self {
            score_by_count: Score::percentage(cnt.lex, cnt.eligible()),
            score_by_freq: Score::percentage(frq.lex, frq.eligible()),
            coverage_by_count: coverage(cnt),
            coverage_by_freq: coverage(frq),
        }
    }

    /// True when at least one score could not be computed.
    pub fn is_degenerate(&self) -> bool {
        !(self.score_by_count.is_defined()
            && self.score_by_freq.is_defined()
            && self.coverage_by_count.is_defined()
            && self.coverage_by_freq.is_defined())
    }
}
