//! Person records
//!
//! One [PersonRecord] per numbered register entry. Fields map directly onto what a renderer
//! needs: an anchor id, the bolded name head, one or two biography segments, the primary
//! marriage line and the children list with its linked/ordinal/continuation tags.

use super::rich_text::RichText;
use serde::{Deserialize, Serialize};

/// Display name from the header line.
///
/// Register headers read `12345. John Doe, born 3 May 1820 in Kent`. The head is the part before
/// the first comma (the name proper), the rest is the descriptive tail that stays on the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub full: String,
    pub head: String,
    pub rest: Option<String>,
}

impl PersonName {
    pub fn new(full: impl Into<String>) -> Self {
        let full = full.into();
        let (head, rest) = crate::names::split_display_name(&full);
        Self {
            head: head.to_string(),
            rest: rest.map(str::to_string),
            full,
        }
    }
}

/// Primary marriage of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarriageStatement {
    pub text: RichText,
}

/// One entry of a children list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRef {
    /// The child's own entry id, when the line announced one.
    pub id: Option<String>,
    pub text: RichText,
    /// False for continuation entries that describe the previous child.
    pub has_ordinal: bool,
    /// True when `id` is a real identifier (rendered with a badge).
    pub is_linked: bool,
}

impl ChildRef {
    pub fn is_continuation(&self) -> bool {
        !self.has_ordinal
    }
}

/// Biography text, pre-split into rendering segments.
///
/// Long biographies are split once at a sentence or clause boundary; the split is computed by the
/// parser because it depends on the text, but it only matters to renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Biography {
    pub segments: Vec<RichText>,
}

impl Biography {
    pub fn is_split(&self) -> bool {
        self.segments.len() > 1
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(RichText::is_empty)
    }

    pub fn to_plain_string(&self) -> String {
        self.segments
            .iter()
            .map(RichText::to_plain_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: String,
    pub name: PersonName,
    /// Generation heading to emit before this record.
    pub generation: Option<String>,
    pub biography: Biography,
    pub marriage: Option<MarriageStatement>,
    pub children: Vec<ChildRef>,
    /// 1-based line of the header in the source.
    pub source_line: usize,
}

impl PersonRecord {
    /// Children that occupy an ordinal slot (i, ii, iii, ...).
    pub fn ordinal_children(&self) -> impl Iterator<Item = &ChildRef> {
        self.children.iter().filter(|child| child.has_ordinal)
    }

    pub fn unresolved_count(&self) -> usize {
        let bio: usize = self
            .biography
            .segments
            .iter()
            .map(RichText::unresolved_count)
            .sum();
        let marriage = self
            .marriage
            .as_ref()
            .map_or(0, |m| m.text.unresolved_count());
        let children: usize = self.children.iter().map(|c| c.text.unresolved_count()).sum();
        bio + marriage + children
    }
}
