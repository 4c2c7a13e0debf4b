//! YAML output

use crate::error::FormatError;
use crate::format::Format;
use lineage_parser::PersonRecord;

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "Parsed records as YAML"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, records: &[PersonRecord]) -> Result<String, FormatError> {
        Ok(serde_yaml::to_string(records)?)
    }
}
