//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name or file extension.

use crate::error::FormatError;
use crate::format::Format;
use lineage_parser::PersonRecord;
use std::collections::HashMap;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let latex = registry.serialize(&outcome.records, "latex")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name of the format that claims a file extension (e.g. "tex" → "latex")
    pub fn detect_from_extension(&self, extension: &str) -> Option<&str> {
        let extension = extension.trim_start_matches('.');
        let mut matches: Vec<&str> = self
            .formats
            .values()
            .filter(|f| {
                f.file_extensions()
                    .iter()
                    .any(|ext| ext.eq_ignore_ascii_case(extension))
            })
            .map(|f| f.name())
            .collect();
        matches.sort_unstable();
        matches.first().copied()
    }

    /// Serialize records using the specified format
    pub fn serialize(&self, records: &[PersonRecord], format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(records)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Register built-in formats
        registry.register(crate::formats::latex::LatexFormat);
        registry.register(crate::formats::tag::TagFormat);
        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::yaml::YamlFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;

    // Test format
    struct TestFormat;
    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test format"
        }
        fn file_extensions(&self) -> &[&str] {
            &["tst"]
        }
        fn supports_serialization(&self) -> bool {
            true
        }
        fn serialize(&self, records: &[PersonRecord]) -> Result<String, FormatError> {
            Ok(format!("{} records", records.len()))
        }
    }

    struct ReadOnlyFormat;
    impl Format for ReadOnlyFormat {
        fn name(&self) -> &str {
            "read-only"
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formats.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert!(!registry.has("nonexistent"));
        assert_eq!(registry.list_formats(), vec!["test"]);
    }

    #[test]
    fn test_registry_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let format = registry.get("test");
        assert!(format.is_ok());
        assert_eq!(format.unwrap().description(), "Test format");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.get("nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            _ => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let result = registry.serialize(&[], "test");
        assert_eq!(result.unwrap(), "0 records");
    }

    #[test]
    fn test_registry_serialize_not_supported() {
        let mut registry = FormatRegistry::new();
        registry.register(ReadOnlyFormat);

        match registry.serialize(&[], "read-only") {
            Err(FormatError::NotSupported(msg)) => assert!(msg.contains("read-only")),
            _ => panic!("Expected NotSupported error"),
        }
    }

    #[test]
    fn test_detect_from_extension() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert_eq!(registry.detect_from_extension(".tst"), Some("test"));
        assert_eq!(registry.detect_from_extension("TST"), Some("test"));
        assert_eq!(registry.detect_from_extension("md"), None);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["json", "latex", "tag", "yaml"]);
        assert_eq!(registry.detect_from_extension("tex"), Some("latex"));
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);
        registry.register(TestFormat); // Replace

        assert_eq!(registry.list_formats().len(), 1);
    }
}
