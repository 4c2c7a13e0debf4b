//! Entry segmentation
//!
//!     Splits the register's line stream into one section per person record. This is a single
//!     forward pass; once a line is committed to a section it stays there.
//!
//! States
//!
//!     SeekingFirstRecord   nothing opened yet, non-heading lines are front matter and dropped
//!     InRecordBody         lines go to the open record
//!     InChildrenBlock      as above, but child lines ("67890 ii. ...") never open a record
//!     InGenerationHeader   a heading was seen, its label waits for the next record
//!
//!     A record-start line always closes the open record and opens a new one, except inside a
//!     children block when the line reads as a child entry. A children announcement switches to
//!     InChildrenBlock until the next record start. Generation headings are removed from the
//!     stream and their label is attached to the next record opened.
//!
//!     A line that should have started a record but doesn't match the record-start pattern is
//!     absorbed into the previous record. That is a known limitation of the heuristics, it is not
//!     reported.

use crate::lexing::{classify, ClassifyContext, LineKind, SEGMENT_RULES};
use crate::pipeline::ParserOptions;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmenterState {
    SeekingFirstRecord,
    InRecordBody,
    InChildrenBlock,
    InGenerationHeader,
}

/// Raw lines of one record, header line first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub lines: Vec<String>,
    /// Generation heading that preceded this record.
    pub generation: Option<String>,
    /// 1-based line number of the header.
    pub start_line: usize,
}

impl Section {
    pub fn header(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }
}

/// Line-at-a-time segmenter.
pub struct Segmenter<'o> {
    options: &'o ParserOptions,
    state: SegmenterState,
    current: Option<Section>,
    pending_generation: Option<String>,
    sections: Vec<Section>,
    discarded: usize,
}

impl<'o> Segmenter<'o> {
    pub fn new(options: &'o ParserOptions) -> Self {
        Self {
            options,
            state: SegmenterState::SeekingFirstRecord,
            current: None,
            pending_generation: None,
            sections: Vec::new(),
            discarded: 0,
        }
    }

    pub fn state(&self) -> SegmenterState {
        self.state
    }

    /// Feed one line. `line_number` is 1-based.
    pub fn process_line(&mut self, line_number: usize, line: &str) {
        let line = line.trim_end();
        let context = ClassifyContext {
            in_children: self.state == SegmenterState::InChildrenBlock,
        };
        let kind = classify(SEGMENT_RULES, line, context, self.options)
            .map_or(LineKind::Text, |rule| rule.kind);

        match kind {
            LineKind::Blank => {}
            LineKind::GenerationHeader => {
                self.pending_generation = Some(line.trim().to_string());
                self.state = SegmenterState::InGenerationHeader;
            }
            LineKind::RecordStart => {
                self.close_current();
                self.current = Some(Section {
                    lines: vec![line.to_string()],
                    generation: self.pending_generation.take(),
                    start_line: line_number,
                });
                self.state = SegmenterState::InRecordBody;
            }
            LineKind::ChildrenAnnouncement => {
                if self.push_line(line) {
                    self.state = SegmenterState::InChildrenBlock;
                }
            }
            _ => {
                self.push_line(line);
            }
        }
    }

    fn push_line(&mut self, line: &str) -> bool {
        match self.current.as_mut() {
            Some(section) => {
                section.lines.push(line.to_string());
                true
            }
            None => {
                self.discarded += 1;
                false
            }
        }
    }

    fn close_current(&mut self) {
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
    }

    /// Close the open record and return every section in input order.
    pub fn finish(mut self) -> Vec<Section> {
        self.close_current();
        debug!(
            sections = self.sections.len(),
            discarded_lines = self.discarded,
            "segmented register"
        );
        self.sections
    }
}

/// Segment a whole source text.
pub fn segment(source: &str, options: &ParserOptions) -> Vec<Section> {
    let mut segmenter = Segmenter::new(options);
    for (idx, line) in source.lines().enumerate() {
        segmenter.process_line(idx + 1, line);
    }
    segmenter.finish()
}
