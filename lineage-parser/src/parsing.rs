//! Record parsing
//!
//!     Turns one [Section](crate::segmenting::Section) into a [RecordDraft]: the record's
//!     structure with plain-string text, before any name is resolved.
//!
//! Steps
//!
//!     1. Header. The first line is matched strictly (`<digits>. <text>`). A header without
//!        content fails the record, which is then skipped by the pipeline.
//!
//!     2. Body lines, classified with [BODY_RULES](crate::lexing::BODY_RULES):
//!         - children announcement: everything after it is read as the children list
//!         - marriage: collected, with one line of lookahead for date/place continuations
//!         - child entry: a new child, linked when it carries its own identifier
//!         - next marriage inside the children list: an extra marriage
//!         - text: the previous child's continuation inside the list, biography otherwise
//!
//!     3. Post-processing. The first marriage is primary; later ones are appended to the
//!        biography. The biography is split once when it runs past the configured threshold.
//!
//!     See [record] for the loop, [marriage], [children] and [biography] for the collectors.

pub mod biography;
pub mod children;
pub mod marriage;
pub mod record;

pub use record::parse_section;

use crate::ast::PersonName;

/// Child entry before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildDraft {
    pub id: Option<String>,
    pub text: String,
    pub has_ordinal: bool,
    pub is_linked: bool,
    /// Whether the resolver should try to link the leading name.
    pub link_name: bool,
}

/// A parsed record whose text is still plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub id: String,
    pub name: PersonName,
    pub generation: Option<String>,
    /// One segment, or two when the biography was split.
    pub biography: Vec<String>,
    pub marriage: Option<String>,
    pub children: Vec<ChildDraft>,
    pub source_line: usize,
}
