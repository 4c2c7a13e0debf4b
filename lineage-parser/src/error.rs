//! Record-level errors and the skip log
//!
//! Failures are isolated per record: the pipeline turns a [RecordError] into a [SkipEntry] and
//! moves on. Only fatal input problems (see [crate::loader::LoaderError]) stop a run.

use std::fmt;
use std::io;
use thiserror::Error;

/// Why a record section could not become a [crate::ast::PersonRecord].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("empty record section")]
    EmptySection,
    #[error("invalid entry format: {line:?}")]
    MalformedHeader { line: String },
    #[error("duplicate identifier {id} (first used on line {first_line})")]
    DuplicateId { id: String, first_line: usize },
}

/// Length of the name fragment kept for skipped records.
const FRAGMENT_CHARS: usize = 30;

/// One skipped record: best-known id, a name fragment and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipEntry {
    pub id: Option<String>,
    pub fragment: String,
    pub reason: String,
    /// 1-based line of the record header.
    pub line: usize,
}

impl SkipEntry {
    pub fn new(id: Option<String>, header: &str, reason: impl Into<String>, line: usize) -> Self {
        Self {
            id,
            fragment: fragment_of(header),
            reason: reason.into(),
            line,
        }
    }
}

impl fmt::Display for SkipEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry {}: {} - {}",
            self.id.as_deref().unwrap_or("Unknown"),
            self.fragment,
            self.reason
        )
    }
}

fn fragment_of(header: &str) -> String {
    let mut fragment: String = header.trim().chars().take(FRAGMENT_CHARS).collect();
    fragment.push_str("...");
    fragment
}

/// Skipped records of one run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipLog {
    entries: Vec<SkipEntry>,
}

impl SkipLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: SkipEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[SkipEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a record with this id was skipped.
    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id.as_deref() == Some(id))
    }

    /// Write the side file, one entry per line.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(writer, "{}", entry)?;
        }
        writer.flush()
    }
}

impl fmt::Display for SkipLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_line_format() {
        let entry = SkipEntry::new(
            Some("12346".to_string()),
            "12346.",
            RecordError::MalformedHeader {
                line: "12346.".to_string(),
            }
            .to_string(),
            4,
        );
        assert_eq!(
            entry.to_string(),
            "Entry 12346: 12346.... - invalid entry format: \"12346.\""
        );
    }

    #[test]
    fn test_fragment_is_truncated() {
        let header = "123. A very long header line that keeps going and going";
        let entry = SkipEntry::new(None, header, "reason", 1);
        assert_eq!(entry.fragment, "123. A very long header line t...");
        assert!(entry.to_string().starts_with("Entry Unknown: "));
    }

    #[test]
    fn test_write_to() {
        let mut log = SkipLog::new();
        log.push(SkipEntry::new(Some("1".into()), "1.", "first", 1));
        log.push(SkipEntry::new(Some("2".into()), "2.", "second", 2));

        let mut out = Vec::new();
        log.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Entry 1: 1.... - first\nEntry 2: 2.... - second\n");
        assert!(log.contains_id("2"));
    }
}
