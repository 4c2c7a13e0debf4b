//! Cross-reference resolution
//!
//!     Rewrites person names in prose into [Mention]s. A mention either points at a registered
//!     entry or stays an unresolved placeholder; an unmatched name is never an error.
//!
//! Passes
//!
//!     First pass (per record, right after it was registered): URLs are split out, then parent
//!     ("son of X and Y") and spouse ("married Y") names in biography, marriage and child text
//!     become mentions, resolved against the registry as it is at that point. A child's leading
//!     name is linked to the child's own id when the line announced one.
//!
//!     Second pass (after every record is registered): unresolved placeholders are looked up
//!     again, and the broader parent patterns plus the spouse pattern run over the remaining plain
//!     text. The pass repeats until nothing changes, so running it again is a no-op.
//!
//!     Ambiguous names resolve to whatever the registry returns first. See
//!     [PersonRegistry::lookup].

pub mod guards;
pub mod mentions;
pub mod urls;

use crate::ast::{Biography, ChildRef, Inline, MarriageStatement, Mention, PersonRecord, RichText, Target};
use crate::lexing::patterns::match_child_name;
use crate::parsing::{ChildDraft, RecordDraft};
use crate::registry::PersonRegistry;
use mentions::{find_mentions, MentionPattern, FIRST_PASS, SECOND_PASS};
use std::mem;

pub struct Resolver<'r> {
    registry: &'r PersonRegistry,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r PersonRegistry) -> Self {
        Self { registry }
    }

    /// Turn a parsed draft into a record, resolving what the registry knows so far.
    pub fn first_pass(&self, draft: RecordDraft) -> PersonRecord {
        let biography = Biography {
            segments: draft
                .biography
                .iter()
                .map(|segment| self.prose(segment, FIRST_PASS))
                .collect(),
        };
        let marriage = draft.marriage.as_deref().map(|text| MarriageStatement {
            text: self.prose(text, FIRST_PASS),
        });
        let children = draft.children.into_iter().map(|child| self.child(child)).collect();

        PersonRecord {
            id: draft.id,
            name: draft.name,
            generation: draft.generation,
            biography,
            marriage,
            children,
            source_line: draft.source_line,
        }
    }

    /// Retry placeholders and scan plain text again. Returns how many mentions were resolved or
    /// added.
    pub fn second_pass(&self, record: &mut PersonRecord) -> usize {
        let mut changed = 0;
        for segment in &mut record.biography.segments {
            changed += self.revisit(segment);
        }
        if let Some(marriage) = record.marriage.as_mut() {
            changed += self.revisit(&mut marriage.text);
        }
        for child in &mut record.children {
            changed += self.revisit(&mut child.text);
        }
        changed
    }

    /// A mention of `name`, resolved by registry lookup when possible.
    pub fn mention(&self, name: &str) -> Mention {
        match self.registry.lookup(name) {
            Some(id) => Mention::resolved(name, id),
            None => Mention::unresolved(name, None),
        }
    }

    fn prose(&self, text: &str, patterns: &[MentionPattern]) -> RichText {
        let mut rich = RichText::new();
        for inline in urls::split_urls(text) {
            match inline {
                Inline::Text(plain) => rich.extend(self.link_names(&plain, patterns).0),
                other => rich.push(other),
            }
        }
        rich
    }

    /// Replace every linkable name in `text` with a mention. Also returns the mention count.
    fn link_names(&self, text: &str, patterns: &[MentionPattern]) -> (RichText, usize) {
        let ranges = find_mentions(text, patterns);
        let mut rich = RichText::new();
        let mut last = 0;
        for range in &ranges {
            rich.push_text(&text[last..range.start]);
            rich.push(Inline::Mention(self.mention(&text[range.clone()])));
            last = range.end;
        }
        rich.push_text(&text[last..]);
        (rich, ranges.len())
    }

    fn child(&self, draft: ChildDraft) -> ChildRef {
        let mut text = RichText::new();
        let mut rest = draft.text.as_str();

        if draft.link_name {
            let name = match_child_name(rest).name;
            if guards::is_linkable_name(name) {
                let mention = match draft.id.as_deref() {
                    Some(id) if self.registry.contains_id(id) => Mention::resolved(name, id),
                    Some(id) => Mention::unresolved(name, Some(id.to_string())),
                    None => self.mention(name),
                };
                let offset = rest.len() - rest.trim_start().len();
                text.push_text(&rest[..offset]);
                text.push(Inline::Mention(mention));
                rest = &rest[offset + name.len()..];
            }
        }
        text.extend(self.prose(rest, FIRST_PASS));

        ChildRef {
            id: draft.id,
            text,
            has_ordinal: draft.has_ordinal,
            is_linked: draft.is_linked,
        }
    }

    /// Second-pass rewrite of one rich text, repeated until stable.
    fn revisit(&self, text: &mut RichText) -> usize {
        let mut total = 0;
        loop {
            let mut changed = 0;
            let mut rewritten = RichText::new();
            for inline in mem::take(text).into_inlines() {
                match inline {
                    Inline::Mention(mut mention) => {
                        if self.retry(&mut mention) {
                            changed += 1;
                        }
                        rewritten.push(Inline::Mention(mention));
                    }
                    Inline::Text(plain) => {
                        let (linked, count) = self.link_names(&plain, SECOND_PASS);
                        changed += count;
                        rewritten.extend(linked);
                    }
                    url @ Inline::Url(_) => rewritten.push(url),
                }
            }
            *text = rewritten;
            total += changed;
            if changed == 0 {
                return total;
            }
        }
    }

    /// Resolve a placeholder if the registry now knows it. Returns whether it changed.
    fn retry(&self, mention: &mut Mention) -> bool {
        let resolved = match &mention.target {
            Target::Resolved(_) => return false,
            Target::Unresolved { expected: Some(id) } => {
                self.registry.contains_id(id).then(|| id.clone())
            }
            Target::Unresolved { expected: None } => {
                self.registry.lookup(&mention.name).map(str::to_string)
            }
        };
        match resolved {
            Some(id) => {
                mention.target = Target::Resolved(id);
                true
            }
            None => false,
        }
    }
}
