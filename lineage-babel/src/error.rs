//! Errors raised by formats and the format registry

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("{0}")]
    NotSupported(String),
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}
