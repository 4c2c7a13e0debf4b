//! Parse pipeline
//!
//!     [RegisterParser] runs the whole conversion for one source text:
//!
//!         1. OCR cleanup and segmentation into record sections.
//!         2. For each section in order: parse, reject duplicate ids, register the name head,
//!            resolve against the registry so far (first pass).
//!         3. Once every record is registered: second pass over all records.
//!
//!     A section that fails to parse is logged to the [SkipLog] and the run moves on. The
//!     registry is built fresh for each run and returned with the records.

use crate::ast::PersonRecord;
use crate::error::{RecordError, SkipEntry, SkipLog};
use crate::ocr::clean_ocr_text;
use crate::parsing::parse_section;
use crate::registry::PersonRegistry;
use crate::resolving::Resolver;
use crate::segmenting::segment;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Tunables of the heuristics. Mirrors the `[parser]` table of the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Minimum number of digits in a record identifier.
    pub min_id_digits: usize,
    /// Biography length (in characters) above which it is split in two.
    pub bio_split_threshold: usize,
    /// Longest roman numeral accepted as a child ordinal.
    pub max_roman_length: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            min_id_digits: 1,
            bio_split_threshold: 300,
            max_roman_length: 6,
        }
    }
}

/// Result of one run.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<PersonRecord>,
    pub skipped: SkipLog,
    pub registry: PersonRegistry,
}

impl ParseOutcome {
    pub fn record(&self, id: &str) -> Option<&PersonRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Mentions still unresolved after both passes.
    pub fn unresolved_count(&self) -> usize {
        self.records.iter().map(PersonRecord::unresolved_count).sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterParser {
    options: ParserOptions,
}

impl RegisterParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn parse(&self, source: &str) -> ParseOutcome {
        let cleaned = clean_ocr_text(source);
        let sections = segment(&cleaned, &self.options);

        let mut registry = PersonRegistry::new();
        let mut records = Vec::with_capacity(sections.len());
        let mut skipped = SkipLog::new();
        let mut first_lines: HashMap<String, usize> = HashMap::new();

        for section in &sections {
            let header = section.header().unwrap_or_default();
            let result = parse_section(section, &self.options).and_then(|draft| {
                match first_lines.get(&draft.id) {
                    Some(&first_line) => Err(RecordError::DuplicateId {
                        id: draft.id.clone(),
                        first_line,
                    }),
                    None => Ok(draft),
                }
            });

            match result {
                Ok(draft) => {
                    first_lines.insert(draft.id.clone(), draft.source_line);
                    registry.register(&draft.id, &draft.name.head);
                    records.push(Resolver::new(&registry).first_pass(draft));
                }
                Err(err) => {
                    let id = header_id(header);
                    warn!(id = id.as_deref().unwrap_or("unknown"), line = section.start_line, %err, "skipping record");
                    skipped.push(SkipEntry::new(id, header, err.to_string(), section.start_line));
                }
            }
        }

        let resolver = Resolver::new(&registry);
        let resolved: usize = records.iter_mut().map(|record| resolver.second_pass(record)).sum();

        let outcome = ParseOutcome {
            records,
            skipped,
            registry,
        };
        debug!(
            records = outcome.records.len(),
            skipped = outcome.skipped.len(),
            second_pass_changes = resolved,
            unresolved = outcome.unresolved_count(),
            "parsed register"
        );
        outcome
    }
}

/// Leading digits of a header line, the best id available for a skipped record.
fn header_id(header: &str) -> Option<String> {
    let digits: String = header.trim_start().chars().take_while(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ParseOutcome {
        RegisterParser::default().parse(source)
    }

    #[test]
    fn test_single_record() {
        let outcome = parse("12345. Jane Doe, some bio text\n");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].id, "12345");
        assert_eq!(outcome.records[0].name.full, "Jane Doe, some bio text");
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_duplicate_id_is_skipped() {
        let outcome = parse("1. Jane Doe\n2. John Doe\n1. Jane Roe\n");
        let ids: Vec<_> = outcome.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped.entries()[0].line, 3);
        assert!(outcome.skipped.entries()[0].reason.starts_with("duplicate identifier 1"));
    }

    #[test]
    fn test_forward_reference_resolved_in_second_pass() {
        let outcome = parse("1. Tom Doe\nHe was the son of Ann Hill.\n2. Ann Hill\n");
        let mention = outcome.records[0].biography.segments[0].mentions().next().cloned();
        assert_eq!(mention.and_then(|m| m.target_id().map(str::to_string)), Some("2".to_string()));
        assert_eq!(outcome.unresolved_count(), 0);
    }

    #[test]
    fn test_header_id() {
        assert_eq!(header_id("12346."), Some("12346".to_string()));
        assert_eq!(header_id("Jane"), None);
    }
}
