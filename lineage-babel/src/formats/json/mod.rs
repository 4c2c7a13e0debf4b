//! JSON output
//!
//! Pretty-printed serde serialization of the records, mentions included. Useful for feeding
//! other tools and for reviewing what the parser recovered.

use crate::error::FormatError;
use crate::format::Format;
use lineage_parser::PersonRecord;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Parsed records as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, records: &[PersonRecord]) -> Result<String, FormatError> {
        let mut output = serde_json::to_string_pretty(records)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_parser::RegisterLoader;

    #[test]
    fn test_json_round_trips_records() {
        let outcome = RegisterLoader::from_string("1. Tom Doe\nHe was the son of Ann Hill.\n").parse();
        let json = JsonFormat.serialize(&outcome.records).unwrap();
        let back: Vec<PersonRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome.records);
        assert!(json.contains("\"unresolved\""));
    }
}
