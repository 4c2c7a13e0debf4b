//! Line patterns
//!
//! Compiled once, shared by the segmenter and the record parser. Limits that are configurable
//! (identifier digits, roman numeral length) are checked in code after the regex matched, so the
//! regexes themselves stay static.
//!
//! All helpers take the line with trailing whitespace already removed. Record starts must begin
//! at column 0; every other pattern tolerates leading whitespace.

use crate::pipeline::ParserOptions;
use once_cell::sync::Lazy;
use regex::Regex;

/// `12345. anything` or a bare `12345.` (boundary only, the header check is stricter).
static RECORD_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.(?:\s+(.*))?$").unwrap());

/// `12345. Name, ...` with real content after the period.
static RECORD_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s+(\S.*)$").unwrap());

static GENERATION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:\d+(?:st|nd|rd|th)|first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|eleventh|twelfth|thirteenth|fourteenth|fifteenth|sixteenth|seventeenth|eighteenth|nineteenth|twentieth|twenty[- ](?:first|second|third|fourth|fifth|sixth|seventh|eighth|ninth))\s+generation\s*$",
    )
    .unwrap()
});

/// "Children from this marriage ..." or the possessive form, which needs its colon:
/// "Her children were:" opens a list, "Her children were all baptized." is prose.
static CHILDREN_ANNOUNCEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(?:(?:the\s+)?child(?:ren)?|the\s+following\s+child(?:ren)?)\s+(?:from|of|by)\s+this\s+marriage|(?:his|her|their)\s+child(?:ren)?\s+(?:was|were|is|are)\s*:)",
    )
    .unwrap()
});

/// `67890 ii. text` or `(67890) ii text`: identifier first, then the ordinal.
static CHILD_WITH_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*\(?(\d+)\)?\s+([ivxlcdm]+)\.?\s+(.*)$").unwrap());

/// `ii. text`
static CHILD_ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*([ivxlcdm]+)\.\s+(.*)$").unwrap());

/// Identifier right after the ordinal: `ii. 67890 John Doe`.
static LEADING_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(?(\d+)\)?\s+(.*)$").unwrap());

static MARRIED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bmarried\b").unwrap());

static NEXT_MARRIED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bnext\s+married\b").unwrap());

static MARRIAGE_CONTINUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:,|(?:(?:on|in|about|abt\.?|circa|c\.|before|after)\s+)?\d)").unwrap()
});

/// Where a child's name ends in prose like "John Doe was born 1820".
static LIFE_EVENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+(?:was\s+born|was\s+baptized|was\s+christened|born|baptized|christened|died)\b")
        .unwrap()
});

/// A child line split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildLine<'a> {
    pub id: Option<&'a str>,
    pub ordinal: &'a str,
    pub text: &'a str,
}

/// Identifier of a line that opens a new record section, if it does.
pub fn match_record_boundary<'a>(line: &'a str, options: &ParserOptions) -> Option<&'a str> {
    let caps = RECORD_BOUNDARY.captures(line)?;
    let id = caps.get(1)?.as_str();
    (id.len() >= options.min_id_digits).then_some(id)
}

/// Identifier and display name of a well-formed record header.
pub fn match_record_header<'a>(line: &'a str, options: &ParserOptions) -> Option<(&'a str, &'a str)> {
    let caps = RECORD_HEADER.captures(line)?;
    let id = caps.get(1)?.as_str();
    let name = caps.get(2)?.as_str().trim();
    (id.len() >= options.min_id_digits).then_some((id, name))
}

/// Trimmed label of a generation heading line.
pub fn match_generation_header(line: &str) -> Option<&str> {
    GENERATION_HEADER.is_match(line).then(|| line.trim())
}

pub fn is_children_announcement(line: &str) -> bool {
    CHILDREN_ANNOUNCEMENT.is_match(line)
}

/// Parse a child entry line, in either identifier-first or ordinal-first form.
pub fn match_child_line<'a>(line: &'a str, options: &ParserOptions) -> Option<ChildLine<'a>> {
    if let Some(caps) = CHILD_WITH_ID.captures(line) {
        let ordinal = caps.get(2)?.as_str();
        if ordinal.len() <= options.max_roman_length {
            return Some(ChildLine {
                id: Some(caps.get(1)?.as_str()),
                ordinal,
                text: caps.get(3)?.as_str().trim(),
            });
        }
    }
    let caps = CHILD_ORDINAL.captures(line)?;
    let ordinal = caps.get(1)?.as_str();
    if ordinal.len() > options.max_roman_length {
        return None;
    }
    let rest = caps.get(2)?.as_str().trim();
    match LEADING_ID.captures(rest) {
        Some(inner) => Some(ChildLine {
            id: Some(inner.get(1)?.as_str()),
            ordinal,
            text: inner.get(2)?.as_str().trim(),
        }),
        None => Some(ChildLine {
            id: None,
            ordinal,
            text: rest,
        }),
    }
}

/// Leading name of a child's display text.
///
/// The name runs up to the first comma or life-event phrase ("was born", "died", ...).
/// `has_life_event` tells whether such a phrase was found, which is what makes name-only linking
/// of children without an identifier trustworthy enough to try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildName<'a> {
    pub name: &'a str,
    pub has_life_event: bool,
}

pub fn match_child_name(text: &str) -> ChildName<'_> {
    let text = text.trim_start();
    let event = LIFE_EVENT.find(text).map(|m| m.start());
    let comma = text.find(',');
    let end = match (event, comma) {
        (Some(e), Some(c)) => e.min(c),
        (Some(e), None) => e,
        (None, Some(c)) => c,
        (None, None) => text.len(),
    };
    ChildName {
        name: text[..end].trim_end().trim_end_matches('.'),
        has_life_event: event.is_some(),
    }
}

pub fn is_marriage(line: &str) -> bool {
    MARRIED.is_match(line)
}

pub fn is_next_marriage(line: &str) -> bool {
    NEXT_MARRIED.is_match(line)
}

/// A bare date/place fragment that finishes the previous marriage line.
pub fn is_marriage_continuation(line: &str) -> bool {
    MARRIAGE_CONTINUATION.is_match(line)
}
