//! Document analysis driver
//!
//! [`Analyzer`] owns the run-wide read-only inputs (lexicon, stopwords,
//! encoding) and applies the pipeline to one document at a time. [`Analyzer::run`]
//! walks a file index, writes each rendered report as soon as it is ready, and
//! keeps going when a single document cannot be read.

use crate::classify::Classifier;
use crate::io::{error_chain, read_document, DocumentError, Encoding};
use crate::lexicon::Lexicon;
use crate::report::Reporter;
use crate::stats::{CoverageScores, StatisticsRecord};
use crate::stopwords::StopwordSet;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Statistics and scores for one analyzed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    #[serde(rename = "file")]
    pub identifier: String,
    pub stats: StatisticsRecord,
    pub scores: CoverageScores,
}

/// Tally of a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents listed in the index.
    pub listed: usize,
    pub analyzed: usize,
    /// Analyzed documents with at least one undefined score.
    pub degenerate: usize,
    pub missing: usize,
    pub undecodable: usize,
}

impl RunSummary {
    pub fn skipped(&self) -> usize {
        self.missing + self.undecodable
    }

    fn record_failure(&mut self, err: &DocumentError) {
        match err {
            DocumentError::MissingInput { .. } => self.missing += 1,
            DocumentError::Encoding { .. } => self.undecodable += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Lexicon,
    stopwords: StopwordSet,
    encoding: Encoding,
    progress_interval: usize,
}

impl Analyzer {
    pub fn new(lexicon: Lexicon, stopwords: StopwordSet) -> Self {
        Self {
            lexicon,
            stopwords,
            encoding: Encoding::default(),
            progress_interval: 0,
        }
    }

    /// Encoding used to decode documents.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Log progress every `interval` documents; 0 disables it.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(&self.stopwords, &self.lexicon)
    }

    /// Run the pure pipeline over already-decoded text.
    pub fn analyze_text(&self, identifier: impl Into<String>, text: &str) -> DocumentReport {
        let classified = self.classifier().classify_text(text);
        let stats = StatisticsRecord::from_classified(&classified);
        DocumentReport {
            identifier: identifier.into(),
            scores: stats.scores(),
            stats,
        }
    }

    pub fn analyze_path(&self, path: &Path) -> Result<DocumentReport, DocumentError> {
        let text = read_document(path, self.encoding)?;
        Ok(self.analyze_text(path.display().to_string(), &text))
    }

    /// Analyze every listed document in order and write each rendered report
    /// to `out`.
    ///
    /// Per-document failures are rendered and counted; only a failing writer
    /// stops the run.
    pub fn run<W: Write>(
        &self,
        documents: &[PathBuf],
        reporter: &Reporter,
        out: &mut W,
    ) -> std::io::Result<RunSummary> {
        let mut summary = RunSummary {
            listed: documents.len(),
            ..RunSummary::default()
        };

        for (index, path) in documents.iter().enumerate() {
            match self.analyze_path(path) {
                Ok(report) => {
                    summary.analyzed += 1;
                    if report.scores.is_degenerate() {
                        summary.degenerate += 1;
                        debug!(path = %path.display(), "document has undefined scores");
                    }
                    out.write_all(reporter.render_document(&report)?.as_bytes())?;
                }
                Err(err) => {
                    warn!(kind = err.kind(), "skipping document: {}", error_chain(&err));
                    summary.record_failure(&err);
                    let identifier = path.display().to_string();
                    if let Some(rendered) = reporter.render_failure(&identifier, &err) {
                        out.write_all(rendered.as_bytes())?;
                    }
                }
            }

            let processed = index + 1;
            if self.progress_interval > 0 && processed % self.progress_interval == 0 {
                info!(processed, total = documents.len(), "progress");
            }
        }

        if let Some(rendered) = reporter.render_summary(&summary) {
            out.write_all(rendered.as_bytes())?;
        }
        out.flush()?;

        info!(
            analyzed = summary.analyzed,
            skipped = summary.skipped(),
            "run finished"
        );
        Ok(summary)
    }
}
