//! Fluent assertions for parsed records
//!
//!     Tests that walk `PersonRecord` fields by hand break whenever the record shape changes and
//!     tend to check counts instead of content. These builders read like the register itself and
//!     keep the field access in one place.
//!
//!     ```rust,ignore
//!     use lineage_parser::testing::assert_record;
//!
//!     assert_record(&outcome.records[0])
//!         .id("12345")
//!         .head("Jane Doe")
//!         .biography_contains("born in Kent")
//!         .marriage_mentions("Mary Roe", Some("3"))
//!         .child_count(2)
//!         .child(0, |child| {
//!             child.linked("67890").mention("John Doe", Some("67890"));
//!         })
//!         .child(1, |child| {
//!             child.continuation().text_contains("died young");
//!         });
//!     ```
//!
//!     Every failure message carries the record id and the path to the field, so a failing
//!     assertion deep inside a children list still says which record and which child.

use crate::ast::{ChildRef, Mention, PersonRecord, RichText};

pub fn assert_record(record: &PersonRecord) -> RecordAssertion<'_> {
    RecordAssertion {
        context: format!("record {}", record.id),
        record,
    }
}

pub struct RecordAssertion<'a> {
    record: &'a PersonRecord,
    context: String,
}

impl<'a> RecordAssertion<'a> {
    pub fn id(self, expected: &str) -> Self {
        assert_eq!(self.record.id, expected, "{}: id", self.context);
        self
    }

    pub fn head(self, expected: &str) -> Self {
        assert_eq!(self.record.name.head, expected, "{}: name head", self.context);
        self
    }

    pub fn generation(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.record.generation.as_deref(),
            expected,
            "{}: generation",
            self.context
        );
        self
    }

    pub fn biography_segments(self, expected: usize) -> Self {
        assert_eq!(
            self.record.biography.segments.len(),
            expected,
            "{}: biography segments",
            self.context
        );
        self
    }

    pub fn biography_contains(self, needle: &str) -> Self {
        let text = self.record.biography.to_plain_string();
        assert!(
            text.contains(needle),
            "{}: biography {:?} does not contain {:?}",
            self.context,
            text,
            needle
        );
        self
    }

    pub fn biography_mentions(self, name: &str, target: Option<&str>) -> Self {
        let found = self
            .record
            .biography
            .segments
            .iter()
            .flat_map(RichText::mentions)
            .find(|m| m.name == name);
        check_mention(&format!("{}: biography", self.context), name, found, target);
        self
    }

    pub fn no_marriage(self) -> Self {
        assert!(
            self.record.marriage.is_none(),
            "{}: expected no marriage, found {:?}",
            self.context,
            self.record.marriage
        );
        self
    }

    pub fn marriage(self, expected: &str) -> Self {
        let text = self.marriage_text();
        assert_eq!(text, expected, "{}: marriage", self.context);
        self
    }

    pub fn marriage_mentions(self, name: &str, target: Option<&str>) -> Self {
        let found = self
            .record
            .marriage
            .as_ref()
            .and_then(|m| m.text.mentions().find(|m| m.name == name));
        check_mention(&format!("{}: marriage", self.context), name, found, target);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.record.children.len(),
            expected,
            "{}: child count",
            self.context
        );
        self
    }

    pub fn child<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(ChildAssertion<'a>),
    {
        let child = self.record.children.get(index).unwrap_or_else(|| {
            panic!(
                "{}: no child at index {} ({} children)",
                self.context,
                index,
                self.record.children.len()
            )
        });
        check(ChildAssertion {
            child,
            context: format!("{}: child {}", self.context, index),
        });
        self
    }

    pub fn unresolved_count(self, expected: usize) -> Self {
        assert_eq!(
            self.record.unresolved_count(),
            expected,
            "{}: unresolved mentions",
            self.context
        );
        self
    }

    fn marriage_text(&self) -> String {
        match &self.record.marriage {
            Some(marriage) => marriage.text.to_plain_string(),
            None => panic!("{}: expected a marriage, found none", self.context),
        }
    }
}

pub struct ChildAssertion<'a> {
    child: &'a ChildRef,
    context: String,
}

impl<'a> ChildAssertion<'a> {
    /// Ordinal child carrying its own entry id.
    pub fn linked(self, id: &str) -> Self {
        assert!(self.child.is_linked, "{}: expected a linked child", self.context);
        assert_eq!(self.child.id.as_deref(), Some(id), "{}: child id", self.context);
        self
    }

    pub fn unlinked(self) -> Self {
        assert!(
            !self.child.is_linked && self.child.id.is_none(),
            "{}: expected an unlinked child, found id {:?}",
            self.context,
            self.child.id
        );
        self
    }

    pub fn continuation(self) -> Self {
        assert!(
            self.child.is_continuation(),
            "{}: expected a continuation entry",
            self.context
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.child.text.to_plain_string(), expected, "{}: text", self.context);
        self
    }

    pub fn text_contains(self, needle: &str) -> Self {
        let text = self.child.text.to_plain_string();
        assert!(
            text.contains(needle),
            "{}: text {:?} does not contain {:?}",
            self.context,
            text,
            needle
        );
        self
    }

    pub fn mention(self, name: &str, target: Option<&str>) -> Self {
        let found = self.child.text.mentions().find(|m| m.name == name);
        check_mention(&self.context, name, found, target);
        self
    }

    pub fn no_mentions(self) -> Self {
        assert_eq!(self.child.text.mentions().count(), 0, "{}: mentions", self.context);
        self
    }
}

fn check_mention(context: &str, name: &str, found: Option<&Mention>, target: Option<&str>) {
    let mention = found.unwrap_or_else(|| panic!("{}: no mention of {:?}", context, name));
    assert_eq!(
        mention.target_id(),
        target,
        "{}: target of mention {:?}",
        context,
        name
    );
}
