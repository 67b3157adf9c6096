//! # lexcov
//!
//! Lexical coverage analysis for plain-text documents.
//!
//! A document is split into tokens, every token is normalized and sorted into
//! exactly one [`Category`], and the per-category tallies are turned into
//! coverage and score percentages:
//!
//! ```text
//! text -> tokenize -> normalize -> classify -> aggregate -> report
//! ```
//!
//! The pipeline itself ([`tokenizing`], [`classify`], [`stats`]) is pure. File
//! access lives in [`io`], rendering in [`report`], and the loop over a file
//! index in [`run`].

pub mod classify;
pub mod io;
pub mod lexicon;
pub mod report;
pub mod run;
pub mod stats;
pub mod stopwords;
pub mod tokenizing;

pub use classify::{Category, ClassifiedTokens, Classifier};
pub use io::{DecodeError, DocumentError, Encoding, LoadError};
pub use lexicon::Lexicon;
pub use report::{ReportFormat, ReportStyle, Reporter};
pub use run::{Analyzer, DocumentReport, RunSummary};
pub use stats::{CoverageScores, Score, StatisticsRecord};
pub use stopwords::StopwordSet;
