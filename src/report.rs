//! Report rendering
//!
//! Three output formats share one [`Reporter`]:
//!
//! - `text`: a human-readable block per document followed by its CSV line, and
//!   a run summary at the end
//! - `csv`: only the CSV line per document
//! - `json`: one JSON object per line per document
//!
//! The CSV line has the fixed column order
//! `score_by_count,coverage_by_count,score_by_freq,coverage_by_freq,<identifier>`.
//!
//! Undefined scores render as [`ReportStyle::undefined_marker`] in text and csv
//! output and as `null` in json output.

use crate::classify::Category;
use crate::io::{error_chain, DocumentError};
use crate::run::{DocumentReport, RunSummary};
use crate::stats::{CategoryCounts, Score};
use serde::Deserialize;
use serde_json::json;
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown format '{other}' (expected text, csv or json)")),
        }
    }
}

/// Number formatting knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    /// Decimal places for percentages.
    pub precision: usize,
    /// Printed in place of an undefined percentage.
    pub undefined_marker: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            precision: 2,
            undefined_marker: "n/a".to_string(),
        }
    }
}

impl ReportStyle {
    pub fn score(&self, score: Score) -> String {
        match score {
            Score::Defined(v) => format!("{:.*}", self.precision, v),
            Score::Undefined => self.undefined_marker.clone(),
        }
    }

    fn share(&self, score: Score) -> String {
        match score {
            Score::Defined(_) => format!("{}%", self.score(score)),
            Score::Undefined => self.undefined_marker.clone(),
        }
    }
}

const SECTION_ROWS: [(&str, Category); 4] = [
    ("IN LEXICON", Category::InLexicon),
    ("NOT IN LEXICON", Category::NotInLexicon),
    ("STOP WORDS", Category::Stopword),
    ("UNKNOWN (DISCARDS)", Category::Discard),
];

#[derive(Debug, Clone, Default)]
pub struct Reporter {
    format: ReportFormat,
    style: ReportStyle,
}

impl Reporter {
    pub fn new(format: ReportFormat, style: ReportStyle) -> Self {
        Self { format, style }
    }

    /// Render one analyzed document. The result ends with a newline.
    pub fn render_document(&self, report: &DocumentReport) -> Result<String, serde_json::Error> {
        Ok(match self.format {
            ReportFormat::Text => self.text_block(report),
            ReportFormat::Csv => format!("{}\n", self.csv_line(report)),
            ReportFormat::Json => format!("{}\n", serde_json::to_string(report)?),
        })
    }

    /// Render a skipped document. csv output has no row for it.
    pub fn render_failure(&self, identifier: &str, err: &DocumentError) -> Option<String> {
        match self.format {
            ReportFormat::Text => {
                Some(format!("[SKIPPED] {identifier}: {}\n\n", error_chain(err)))
            }
            ReportFormat::Csv => None,
            ReportFormat::Json => {
                let value = json!({
                    "file": identifier,
                    "error": err.kind(),
                    "message": error_chain(err),
                });
                Some(format!("{value}\n"))
            }
        }
    }

    /// Render the end-of-run summary; only text output has one.
    pub fn render_summary(&self, summary: &RunSummary) -> Option<String> {
        if self.format != ReportFormat::Text {
            return None;
        }
        let mut out = String::from("[RUN SUMMARY]\n");
        let _ = writeln!(out, "FILE COUNT = {}", summary.listed);
        let _ = writeln!(out, "ANALYZED = {}", summary.analyzed);
        let _ = writeln!(out, "DEGENERATE = {}", summary.degenerate);
        let _ = writeln!(out, "MISSING = {}", summary.missing);
        let _ = writeln!(out, "UNDECODABLE = {}", summary.undecodable);
        Some(out)
    }

    pub fn csv_line(&self, report: &DocumentReport) -> String {
        let scores = &report.scores;
        format!(
            "{},{},{},{},{}",
            self.style.score(scores.score_by_count),
            self.style.score(scores.coverage_by_count),
            self.style.score(scores.score_by_freq),
            self.style.score(scores.coverage_by_freq),
            report.identifier,
        )
    }

    fn text_block(&self, report: &DocumentReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "[FILE] {}", report.identifier);
        self.write_section(&mut out, "[UNIQUE WORD COUNT]", &report.stats.count);
        out.push('\n');
        self.write_section(&mut out, "[TOTAL WORD COUNT (FREQUENCY)]", &report.stats.freq);
        out.push('\n');
        let _ = writeln!(out, "{}", self.csv_line(report));
        out.push('\n');
        out
    }

    fn write_section(&self, out: &mut String, heading: &str, counts: &CategoryCounts) {
        let _ = writeln!(out, "{heading}");
        let _ = writeln!(out, "TOTAL WORDS = {}", counts.total());
        for (label, category) in SECTION_ROWS {
            let _ = writeln!(
                out,
                "{label} = {} ({})",
                counts.get(category),
                self.style.share(counts.share(category))
            );
        }
    }
}
