//! Register loading
//!
//! [RegisterLoader] reads a register from a file or a string and runs the parser on it. The
//! CLI and the integration tests both go through it.
//!
//! OCR output is not always valid UTF-8. Invalid sequences are replaced rather than rejected,
//! so a single bad byte never costs a whole run.
//!
//! ```rust,ignore
//! use lineage_parser::loader::RegisterLoader;
//!
//! let outcome = RegisterLoader::from_path("register.txt")?.parse();
//! let outcome = RegisterLoader::from_string("12345. Jane Doe, born 1801\n").parse();
//! ```

use crate::pipeline::{ParseOutcome, ParserOptions, RegisterParser};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal input failures. These abort a run.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub struct RegisterLoader {
    source: String,
    options: ParserOptions,
}

impl RegisterLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_string(String::from_utf8_lossy(&bytes)))
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        RegisterLoader {
            source: source.into(),
            options: ParserOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Run the full pipeline on the loaded text.
    pub fn parse(&self) -> ParseOutcome {
        RegisterParser::new(self.options.clone()).parse(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_string() {
        let loader = RegisterLoader::from_string("1. Jane Doe\n");
        assert_eq!(loader.source(), "1. Jane Doe\n");
        assert_eq!(loader.parse().records.len(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1. Jane Doe\nShe lived in K\xffnt.\n").unwrap();
        let loader = RegisterLoader::from_path(file.path()).unwrap();
        assert!(loader.source().contains("K\u{fffd}nt"));
    }

    #[test]
    fn test_missing_file() {
        let err = RegisterLoader::from_path("/nonexistent/register.txt").err().unwrap();
        assert!(err.to_string().starts_with("failed to read /nonexistent/register.txt"));
    }
}
