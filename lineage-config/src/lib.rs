//! Shared configuration loader for the lineage toolchain.
//!
//! `defaults/lineage.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`LineageConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/lineage.default.toml");

/// Top-level configuration consumed by lineage applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LineageConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Heuristic knobs of the register parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    pub min_id_digits: usize,
    pub bio_split_threshold: usize,
    pub max_roman_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of the output format in the format registry.
    pub format: String,
    pub skip_log: PathBuf,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LineageConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LineageConfig, ConfigError> {
    Loader::new().build()
}
