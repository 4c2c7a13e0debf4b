//! Line Classification
//!
//! Ordered, named rule lists. `classify` walks a list top to bottom and returns the first rule
//! that applies, so precedence is exactly the order below and can be tested rule by rule.
//!
//! Segmenter order:
//!     1. blank
//!     2. generation-header
//!     3. child-entry            (only inside a children block)
//!     4. record-start
//!     5. children-announcement
//!     6. text                   (fallback)
//!
//! Record body order:
//!     1. blank
//!     2. children-announcement
//!     3. marriage               (only before the children block)
//!     4. child-entry            (only inside the children block)
//!     5. next-marriage          (only inside the children block)
//!     6. text                   (fallback)
use crate::lexing::patterns;
use crate::pipeline::ParserOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Blank,
    GenerationHeader,
    RecordStart,
    ChildrenAnnouncement,
    ChildEntry,
    Marriage,
    NextMarriage,
    Text,
}

/// State that changes how a line reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyContext {
    pub in_children: bool,
}

/// One named matcher.
pub struct LineRule {
    pub name: &'static str,
    pub kind: LineKind,
    applies: fn(&str, ClassifyContext, &ParserOptions) -> bool,
}

impl LineRule {
    pub fn applies(&self, line: &str, context: ClassifyContext, options: &ParserOptions) -> bool {
        (self.applies)(line, context, options)
    }
}

impl std::fmt::Debug for LineRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineRule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

const BLANK: LineRule = LineRule {
    name: "blank",
    kind: LineKind::Blank,
    applies: |line, _, _| line.trim().is_empty(),
};

const CHILDREN_ANNOUNCEMENT: LineRule = LineRule {
    name: "children-announcement",
    kind: LineKind::ChildrenAnnouncement,
    applies: |line, _, _| patterns::is_children_announcement(line),
};

const TEXT: LineRule = LineRule {
    name: "text",
    kind: LineKind::Text,
    applies: |_, _, _| true,
};

pub const SEGMENT_RULES: &[LineRule] = &[
    BLANK,
    LineRule {
        name: "generation-header",
        kind: LineKind::GenerationHeader,
        applies: |line, _, _| patterns::match_generation_header(line).is_some(),
    },
    LineRule {
        name: "child-entry",
        kind: LineKind::ChildEntry,
        applies: |line, context, options| {
            context.in_children && patterns::match_child_line(line, options).is_some()
        },
    },
    LineRule {
        name: "record-start",
        kind: LineKind::RecordStart,
        applies: |line, _, options| patterns::match_record_boundary(line, options).is_some(),
    },
    CHILDREN_ANNOUNCEMENT,
    TEXT,
];

pub const BODY_RULES: &[LineRule] = &[
    BLANK,
    CHILDREN_ANNOUNCEMENT,
    LineRule {
        name: "marriage",
        kind: LineKind::Marriage,
        applies: |line, context, _| !context.in_children && patterns::is_marriage(line),
    },
    LineRule {
        name: "child-entry",
        kind: LineKind::ChildEntry,
        applies: |line, context, options| {
            context.in_children && patterns::match_child_line(line, options).is_some()
        },
    },
    LineRule {
        name: "next-marriage",
        kind: LineKind::NextMarriage,
        applies: |line, context, _| context.in_children && patterns::is_next_marriage(line),
    },
    TEXT,
];

/// First rule in `rules` that applies to `line`.
///
/// Both rule lists end with the `text` fallback, so this only returns `None` for a custom list
/// without one.
pub fn classify<'r>(
    rules: &'r [LineRule],
    line: &str,
    context: ClassifyContext,
    options: &ParserOptions,
) -> Option<&'r LineRule> {
    rules
        .iter()
        .find(|rule| rule.applies(line, context, options))
}
