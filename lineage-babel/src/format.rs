//! Format trait definition
//!
//! This module defines the core Format trait that all output formats implement. Formats receive
//! fully resolved records and decide the concrete markup for mentions, children tags and
//! biography segments.

use crate::error::FormatError;
use lineage_parser::PersonRecord;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, records: &[PersonRecord]) -> Result<String, FormatError> {
///         Ok(records.iter().map(|r| r.id.as_str()).collect::<Vec<_>>().join("\n"))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "latex", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports serialization (records → text)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Serialize parsed records into output text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _records: &[PersonRecord]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
