//! Inline text with person mentions
//!
//! A [RichText] is an ordered run of inlines. Adjacent plain text is always merged, so two rich
//! texts with the same content compare equal regardless of how they were built. That property is
//! what makes the second resolution pass idempotent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a mention points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Resolved to a registered entry id.
    Resolved(String),
    /// No registered entry matched yet. `expected` holds the id a child line announced for
    /// itself, which is preferred once that entry is registered.
    Unresolved { expected: Option<String> },
}

/// A person name found in prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub name: String,
    pub target: Target,
}

impl Mention {
    pub fn resolved(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: Target::Resolved(id.into()),
        }
    }

    pub fn unresolved(name: impl Into<String>, expected: Option<String>) -> Self {
        Self {
            name: name.into(),
            target: Target::Unresolved { expected },
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.target, Target::Resolved(_))
    }

    /// The entry id this mention links to, if resolved.
    pub fn target_id(&self) -> Option<&str> {
        match &self.target {
            Target::Resolved(id) => Some(id.as_str()),
            Target::Unresolved { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Mention(Mention),
    Url(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText {
    inlines: Vec<Inline>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    /// A rich text holding a single plain run (empty input yields an empty text).
    pub fn plain(text: impl Into<String>) -> Self {
        let mut rich = Self::new();
        rich.push_text(text);
        rich
    }

    pub fn from_inlines(inlines: impl IntoIterator<Item = Inline>) -> Self {
        let mut rich = Self::new();
        for inline in inlines {
            rich.push(inline);
        }
        rich
    }

    /// Append an inline, merging plain text into a trailing plain run.
    pub fn push(&mut self, inline: Inline) {
        match inline {
            Inline::Text(text) => self.push_text(text),
            other => self.inlines.push(other),
        }
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        if let Some(Inline::Text(last)) = self.inlines.last_mut() {
            last.push_str(&text);
        } else {
            self.inlines.push(Inline::Text(text));
        }
    }

    /// Append another rich text, keeping the merge invariant.
    pub fn extend(&mut self, other: RichText) {
        for inline in other.inlines {
            self.push(inline);
        }
    }

    pub fn inlines(&self) -> &[Inline] {
        &self.inlines
    }

    pub fn into_inlines(self) -> Vec<Inline> {
        self.inlines
    }

    pub fn is_empty(&self) -> bool {
        self.inlines.is_empty()
    }

    pub fn mentions(&self) -> impl Iterator<Item = &Mention> {
        self.inlines.iter().filter_map(|inline| match inline {
            Inline::Mention(mention) => Some(mention),
            _ => None,
        })
    }

    pub fn unresolved_count(&self) -> usize {
        self.mentions().filter(|m| !m.is_resolved()).count()
    }

    /// The text with mentions and URLs flattened back to their source wording.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for inline in &self.inlines {
            match inline {
                Inline::Text(text) | Inline::Url(text) => out.push_str(text),
                Inline::Mention(mention) => out.push_str(&mention.name),
            }
        }
        out
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        RichText::plain(text)
    }
}
