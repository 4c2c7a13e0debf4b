//! Children list collection
//!
//! Ordinal lines open a child. Non-ordinal lines describe the previous child: the first one
//! opens a continuation entry (no ordinal slot of its own), later ones are appended to it with a
//! single space. A new ordinal line ends the continuation.

use super::ChildDraft;
use crate::lexing::{patterns, ChildLine};

#[derive(Debug, Clone, Default)]
pub struct ChildCollector {
    children: Vec<ChildDraft>,
    /// Index of the continuation entry currently being extended.
    continuing: Option<usize>,
}

impl ChildCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child from an ordinal line.
    pub fn push_child(&mut self, line: ChildLine<'_>) {
        let linked = line.id.is_some();
        let link_name = linked || patterns::match_child_name(line.text).has_life_event;
        self.children.push(ChildDraft {
            id: line.id.map(str::to_string),
            text: line.text.trim().to_string(),
            has_ordinal: true,
            is_linked: linked,
            link_name,
        });
        self.continuing = None;
    }

    /// Add a non-ordinal line. Returns `false` when there is no child to continue, in which case
    /// the caller keeps the line as biography.
    pub fn push_continuation(&mut self, line: &str) -> bool {
        if self.children.is_empty() {
            return false;
        }
        let line = line.trim();
        match self.continuing {
            Some(idx) => {
                let child = &mut self.children[idx];
                child.text.push(' ');
                child.text.push_str(line);
            }
            None => {
                self.children.push(ChildDraft {
                    id: None,
                    text: line.to_string(),
                    has_ordinal: false,
                    is_linked: false,
                    link_name: false,
                });
                self.continuing = Some(self.children.len() - 1);
            }
        }
        true
    }

    pub fn finish(self) -> Vec<ChildDraft> {
        self.children
    }
}
