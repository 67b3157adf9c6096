//! File access and text decoding
//!
//! Everything that touches the filesystem lives here so the pipeline stays pure.
//! There are two failure families:
//!
//! - [`LoadError`]: the lexicon, stopword list or file index cannot be loaded.
//!   Nothing can be analyzed without them, so callers abort the run.
//! - [`DocumentError`]: a single listed document is missing or undecodable.
//!   Callers report it and move on to the next document.
//!
//! Messages name the failing input only; the cause is the error's `source()`.
//! Use [`error_chain`] to print both.

use crate::lexicon::Lexicon;
use crate::stopwords::StopwordSet;
use serde::Deserialize;
use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Text encoding applied to every input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Encoding {
    /// Strict UTF-8. Invalid sequences are an error.
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// ISO-8859-1. Every byte maps to one char, so decoding never fails.
    #[serde(rename = "latin-1", alias = "latin1", alias = "iso-8859-1")]
    Latin1,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin-1",
        }
    }

    /// Decode raw bytes. A leading UTF-8 byte order mark is dropped.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        match self {
            Encoding::Utf8 => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(body)
                    .map(str::to_owned)
                    .map_err(|e| DecodeError {
                        encoding: *self,
                        offset: e.valid_up_to() + (bytes.len() - body.len()),
                    })
            }
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Encoding::Latin1),
            other => Err(format!("unknown encoding '{other}' (expected utf-8 or latin-1)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {encoding} at byte {offset}")]
pub struct DecodeError {
    pub encoding: Encoding,
    pub offset: usize,
}

/// Fatal errors while loading run-wide inputs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {} {}", .what, .path.display())]
    Read {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {} {}", .what, .path.display())]
    Decode {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

/// Per-document failures. These never abort a run.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("missing input {}", .path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

/// Render an error followed by each of its causes, joined with `": "`.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        cause = inner.source();
    }
    out
}

impl DocumentError {
    /// Short machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            DocumentError::MissingInput { .. } => "missing-input",
            DocumentError::Encoding { .. } => "encoding-error",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DocumentError::MissingInput { path, .. } | DocumentError::Encoding { path, .. } => path,
        }
    }
}

fn read_input(path: &Path, encoding: Encoding, what: &'static str) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        what,
        path: path.to_path_buf(),
        source,
    })?;
    encoding.decode(&bytes).map_err(|source| LoadError::Decode {
        what,
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_lexicon_file(path: impl AsRef<Path>, encoding: Encoding) -> Result<Lexicon, LoadError> {
    let path = path.as_ref();
    let lexicon = Lexicon::from_text(&read_input(path, encoding, "lexicon")?);
    info!(path = %path.display(), words = lexicon.len(), "loaded lexicon");
    Ok(lexicon)
}

pub fn load_stopword_file(
    path: impl AsRef<Path>,
    encoding: Encoding,
) -> Result<StopwordSet, LoadError> {
    let path = path.as_ref();
    let stopwords = StopwordSet::from_text(&read_input(path, encoding, "stopword list")?);
    info!(path = %path.display(), words = stopwords.len(), "loaded stopwords");
    Ok(stopwords)
}

/// Parse a file index: one path per line, trailing whitespace ignored, blank
/// lines skipped.
pub fn parse_file_index(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

pub fn read_file_index(
    path: impl AsRef<Path>,
    encoding: Encoding,
) -> Result<Vec<PathBuf>, LoadError> {
    let path = path.as_ref();
    let entries = parse_file_index(&read_input(path, encoding, "file index")?);
    info!(path = %path.display(), documents = entries.len(), "loaded file index");
    Ok(entries)
}

/// Read and decode one listed document.
pub fn read_document(path: &Path, encoding: Encoding) -> Result<String, DocumentError> {
    let bytes = std::fs::read(path).map_err(|source| DocumentError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read document");
    encoding
        .decode(&bytes)
        .map_err(|source| DocumentError::Encoding {
            path: path.to_path_buf(),
            source,
        })
}
