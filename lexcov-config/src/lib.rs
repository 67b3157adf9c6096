//! Shared configuration loader for lexcov.
//!
//! `defaults/lexcov.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`LexcovConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use lexcov::{Encoding, ReportFormat, ReportStyle};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/lexcov.default.toml");

/// Top-level configuration consumed by lexcov applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LexcovConfig {
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
}

/// Inputs shared by every document of a run.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    pub encoding: Encoding,
    #[serde(default)]
    pub stopword_file: Option<PathBuf>,
}

/// Output knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub precision: usize,
    pub undefined_marker: String,
    pub progress_interval: usize,
}

impl ReportConfig {
    pub fn style(&self) -> ReportStyle {
        ReportStyle {
            precision: self.precision,
            undefined_marker: self.undefined_marker.clone(),
        }
    }
}

/// File name picked up from a working directory by [`Loader::with_local_file`].
pub const LOCAL_CONFIG_FILE: &str = "lexcov.toml";

/// Values given directly on the command line. `None` keeps the layered value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagOverrides<'a> {
    pub encoding: Option<&'a str>,
    pub stopword_file: Option<&'a str>,
    pub format: Option<&'a str>,
}

/// Layers, lowest precedence first: embedded defaults, `lexcov.toml` in the
/// working directory, an explicit `--config` file, then command-line flags.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer [`LOCAL_CONFIG_FILE`] from `dir` when it exists.
    pub fn with_local_file(self, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(LOCAL_CONFIG_FILE);
        self.layer(&path, false)
    }

    /// Layer a configuration file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply whichever command-line values were given.
    pub fn with_flags(self, flags: FlagOverrides<'_>) -> Result<Self, ConfigError> {
        let pairs = [
            ("analysis.encoding", flags.encoding),
            ("analysis.stopword_file", flags.stopword_file),
            ("report.format", flags.format),
        ];
        pairs
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .try_fold(self, |loader, (key, value)| loader.set_override(key, value))
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize into [`LexcovConfig`].
    pub fn build(self) -> Result<LexcovConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top.
pub fn load_defaults() -> Result<LexcovConfig, ConfigError> {
    Loader::new().build()
}
