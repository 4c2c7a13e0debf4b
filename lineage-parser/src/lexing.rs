//! Line lexing
//!
//!     Registers are processed one physical line at a time. Lexing here means deciding what a
//!     line is, not tokenizing it: a record start, a generation heading, a children announcement,
//!     a child entry, a marriage sentence, or plain text.
//!
//!     The same line can look like several things at once. "67890 ii. John" is a child entry but
//!     also starts with digits; "He married ..." inside a children list is not the parent's
//!     marriage. Which reading wins depends on a fixed precedence and on one bit of context
//!     (whether we are inside a children list), so the rules are data: an ordered list of named
//!     matchers per consumer. See [line_classification] for both lists.
//!
//!         1. [patterns] holds the compiled regexes and the small extraction helpers.
//!         2. [line_classification] holds the ordered rule lists and `classify`.
//!
//!     The segmenter uses [line_classification::SEGMENT_RULES], the record parser uses
//!     [line_classification::BODY_RULES].

pub mod line_classification;
pub mod patterns;

pub use line_classification::{classify, ClassifyContext, LineKind, LineRule, BODY_RULES, SEGMENT_RULES};
pub use patterns::ChildLine;
