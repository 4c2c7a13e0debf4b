//! Record section parser
//!
//! Walks a section's body lines once, with one line of lookahead for marriage continuations.
//! Each line is classified with [BODY_RULES] and handed to the matching collector.

use super::biography::{join_lines, split_biography};
use super::children::ChildCollector;
use super::marriage::{auxiliary_sentence, MarriageCollector};
use super::RecordDraft;
use crate::ast::PersonName;
use crate::error::RecordError;
use crate::lexing::{classify, patterns, ClassifyContext, LineKind, BODY_RULES};
use crate::pipeline::ParserOptions;
use crate::segmenting::Section;
use tracing::trace;

/// Parse one record section.
pub fn parse_section(section: &Section, options: &ParserOptions) -> Result<RecordDraft, RecordError> {
    let header = section.header().ok_or(RecordError::EmptySection)?;
    let (id, display_name) =
        patterns::match_record_header(header, options).ok_or_else(|| RecordError::MalformedHeader {
            line: header.to_string(),
        })?;
    let name = PersonName::new(display_name);

    let body = &section.lines[1..];
    let mut bio_lines: Vec<&str> = Vec::new();
    let mut marriages = MarriageCollector::new();
    let mut children = ChildCollector::new();
    let mut in_children = false;

    let mut idx = 0;
    while idx < body.len() {
        let line = body[idx].trim();
        let context = ClassifyContext { in_children };
        let kind = classify(BODY_RULES, line, context, options).map_or(LineKind::Text, |rule| rule.kind);

        match kind {
            LineKind::Blank => {}
            LineKind::ChildrenAnnouncement => in_children = true,
            LineKind::Marriage => {
                let continuation = body
                    .get(idx + 1)
                    .map(|next| next.trim())
                    .filter(|next| patterns::is_marriage_continuation(next));
                marriages.push(line, continuation);
                if continuation.is_some() {
                    idx += 1;
                }
            }
            LineKind::ChildEntry => match patterns::match_child_line(line, options) {
                Some(child) => children.push_child(child),
                None => bio_lines.push(line),
            },
            LineKind::NextMarriage => marriages.push(line, None),
            _ => {
                if !(in_children && children.push_continuation(line)) {
                    bio_lines.push(line);
                }
            }
        }
        idx += 1;
    }

    let marriages = marriages.finish();
    let mut biography = join_lines(&bio_lines);
    for statement in &marriages.auxiliary {
        let sentence = auxiliary_sentence(statement, &name.head);
        if biography.contains(statement.trim()) {
            continue;
        }
        if !biography.is_empty() {
            biography.push(' ');
        }
        biography.push_str(&sentence);
    }

    let children = children.finish();
    trace!(
        id,
        bio_chars = biography.len(),
        marriages = marriages.auxiliary.len() + usize::from(marriages.primary.is_some()),
        children = children.len(),
        "parsed record"
    );

    Ok(RecordDraft {
        id: id.to_string(),
        name,
        generation: section.generation.clone(),
        biography: split_biography(&biography, options.bio_split_threshold),
        marriage: marriages.primary,
        children,
        source_line: section.start_line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(lines: &[&str]) -> Section {
        Section {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            generation: None,
            start_line: 1,
        }
    }

    fn parse(lines: &[&str]) -> RecordDraft {
        parse_section(&section(lines), &ParserOptions::default()).unwrap()
    }

    #[test]
    fn test_header_only() {
        let draft = parse(&["12345. Jane Doe, some bio text"]);
        assert_eq!(draft.id, "12345");
        assert_eq!(draft.name.head, "Jane Doe");
        assert_eq!(draft.name.rest.as_deref(), Some("some bio text"));
        assert!(draft.biography.is_empty());
        assert!(draft.marriage.is_none());
    }

    #[test]
    fn test_malformed_header_is_an_error() {
        let err = parse_section(&section(&["12346."]), &ParserOptions::default()).unwrap_err();
        assert_eq!(
            err,
            RecordError::MalformedHeader {
                line: "12346.".to_string()
            }
        );
        let empty = Section {
            lines: Vec::new(),
            generation: None,
            start_line: 1,
        };
        assert_eq!(
            parse_section(&empty, &ParserOptions::default()),
            Err(RecordError::EmptySection)
        );
    }

    #[test]
    fn test_marriage_with_continuation() {
        let draft = parse(&[
            "2. John Doe, farmer",
            "He was born in Kent.",
            "He married Mary Roe",
            "on 12 May 1850 in Dover.",
        ]);
        assert_eq!(draft.marriage.as_deref(), Some("He married Mary Roe on 12 May 1850 in Dover"));
        assert_eq!(draft.biography, vec!["He was born in Kent."]);
    }

    #[test]
    fn test_marriage_without_continuation() {
        let draft = parse(&[
            "2. John Doe",
            "He married Mary Roe.",
            "He was a farmer all his life.",
        ]);
        assert_eq!(draft.marriage.as_deref(), Some("He married Mary Roe"));
        assert_eq!(draft.biography, vec!["He was a farmer all his life."]);
    }

    #[test]
    fn test_auxiliary_marriages_join_biography() {
        let draft = parse(&[
            "2. John Doe, farmer",
            "He was born in Kent.",
            "He married Mary Roe.",
            "Children from this marriage were:",
            "i. Ann Doe.",
            "next married Ann Lee in 1860.",
        ]);
        assert_eq!(draft.marriage.as_deref(), Some("He married Mary Roe"));
        assert_eq!(
            draft.biography,
            vec!["He was born in Kent. John Doe next married Ann Lee in 1860."]
        );
        assert_eq!(draft.children.len(), 1);
    }

    #[test]
    fn test_children_block() {
        let draft = parse(&[
            "2. John Doe",
            "Children from this marriage were:",
            "67890 i. John Doe was born 1820.",
            "ii. Ann Doe died young.",
            "She is buried in Kent",
            "near her mother.",
            "iii. 67891 Tom Doe.",
        ]);
        let ids: Vec<_> = draft.children.iter().map(|c| c.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("67890"), None, None, Some("67891")]);
        assert_eq!(draft.children[2].text, "She is buried in Kent near her mother.");
        assert!(!draft.children[2].has_ordinal);
        assert!(draft.biography.is_empty());
    }

    #[test]
    fn test_text_before_first_child_is_biography() {
        let draft = parse(&[
            "2. John Doe",
            "His children were:",
            "They all lived in Kent.",
            "i. Ann Doe.",
        ]);
        assert_eq!(draft.biography, vec!["They all lived in Kent."]);
        assert_eq!(draft.children.len(), 1);
    }

    #[test]
    fn test_long_biography_is_split() {
        let sentence = "He farmed the land near the river for many years. ";
        let lines: Vec<String> = std::iter::once("3. Tom Doe".to_string())
            .chain(std::iter::repeat(sentence.trim().to_string()).take(8))
            .collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let draft = parse(&refs);
        assert_eq!(draft.biography.len(), 2);
        assert!(draft.biography[0].ends_with('.'));
        assert!(draft.biography[0].chars().count() <= 300);
    }
}
