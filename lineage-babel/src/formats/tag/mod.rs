//! XML-like tag serialization
//!
//! Serializes records to an XML-like format, mainly for inspecting what the parser recovered.
//!
//! ## Format
//!
//! - One `<entry>` per record, preceded by `<generation>` when the record opens one
//! - Mentions → `<mention ref="ID">` or `<mention unresolved="true">`
//! - Children → `<child>` with ordinal and optional id, continuations → `<child-continuation>`
//!
//! ## Example
//!
//! ```text
//! <register>
//!   <generation>Second Generation</generation>
//!   <entry id="2">
//!     <name>John Doe</name>
//!     <name-rest>born 1790</name-rest>
//!     <biography>Son of <mention ref="1">Tom Doe</mention>.</biography>
//!     <children>
//!       <child ordinal="i" id="67890">Peter Doe.</child>
//!     </children>
//!   </entry>
//! </register>
//! ```

use crate::common::{child_ordinals, roman::to_roman};
use crate::error::FormatError;
use crate::format::Format;
use lineage_parser::{Inline, PersonRecord, RichText, Target};

/// Tag serializer that writes records as indented tags
struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn leaf(&mut self, tag: &str, attributes: &str, content: &str) {
        self.push_indent(&format!("<{}{}>{}</{}>\n", tag, attributes, content, tag));
    }

    fn open(&mut self, tag: &str, attributes: &str) {
        self.push_indent(&format!("<{}{}>\n", tag, attributes));
        self.indent_level += 1;
    }

    fn close(&mut self, tag: &str) {
        self.indent_level -= 1;
        self.push_indent(&format!("</{}>\n", tag));
    }

    fn serialize_record(&mut self, record: &PersonRecord) {
        if let Some(generation) = &record.generation {
            self.leaf("generation", "", &escape_xml(generation));
        }
        self.open("entry", &format!(" id=\"{}\"", escape_xml(&record.id)));
        self.leaf("name", "", &escape_xml(&record.name.head));
        if let Some(rest) = &record.name.rest {
            self.leaf("name-rest", "", &escape_xml(rest));
        }
        for segment in &record.biography.segments {
            self.leaf("biography", "", &render_rich(segment));
        }
        if let Some(marriage) = &record.marriage {
            self.leaf("marriage", "", &render_rich(&marriage.text));
        }
        if !record.children.is_empty() {
            self.open("children", "");
            let ordinals = child_ordinals(&record.children);
            for (child, ordinal) in record.children.iter().zip(ordinals) {
                let text = render_rich(&child.text);
                if child.has_ordinal {
                    let mut attributes = format!(" ordinal=\"{}\"", to_roman(ordinal));
                    if let Some(id) = &child.id {
                        attributes.push_str(&format!(" id=\"{}\"", escape_xml(id)));
                    }
                    self.leaf("child", &attributes, &text);
                } else {
                    self.leaf("child-continuation", "", &text);
                }
            }
            self.close("children");
        }
        self.close("entry");
    }
}

fn render_rich(text: &RichText) -> String {
    let mut out = String::new();
    for inline in text.inlines() {
        match inline {
            Inline::Text(plain) => out.push_str(&escape_xml(plain)),
            Inline::Mention(mention) => {
                let attribute = match &mention.target {
                    Target::Resolved(id) => format!("ref=\"{}\"", escape_xml(id)),
                    Target::Unresolved { .. } => "unresolved=\"true\"".to_string(),
                };
                out.push_str(&format!(
                    "<mention {}>{}</mention>",
                    attribute,
                    escape_xml(&mention.name)
                ));
            }
            Inline::Url(url) => out.push_str(&format!("<url>{}</url>", escape_xml(url))),
        }
    }
    out
}

/// Serialize records to tag format
pub fn serialize_records(records: &[PersonRecord]) -> String {
    let mut serializer = TagSerializer::new();
    serializer.open("register", "");
    for record in records {
        serializer.serialize_record(record);
    }
    serializer.close("register");
    serializer.output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format implementation for XML-like tag format
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag format with one element per entry"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, records: &[PersonRecord]) -> Result<String, FormatError> {
        Ok(serialize_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_parser::ast::{Biography, PersonName};
    use lineage_parser::{ChildRef, Mention};

    fn record() -> PersonRecord {
        PersonRecord {
            id: "2".to_string(),
            name: PersonName::new("John Doe, born 1790"),
            generation: Some("Second Generation".to_string()),
            biography: Biography {
                segments: vec![RichText::from_inlines(vec![
                    Inline::Text("Son of ".to_string()),
                    Inline::Mention(Mention::resolved("Tom Doe", "1")),
                    Inline::Text(".".to_string()),
                ])],
            },
            marriage: None,
            children: vec![
                ChildRef {
                    id: Some("67890".to_string()),
                    text: RichText::plain("Peter Doe."),
                    has_ordinal: true,
                    is_linked: true,
                },
                ChildRef {
                    id: None,
                    text: RichText::plain("He went west."),
                    has_ordinal: false,
                    is_linked: false,
                },
            ],
            source_line: 1,
        }
    }

    #[test]
    fn test_serialize_record() {
        let expected = r#"<register>
  <generation>Second Generation</generation>
  <entry id="2">
    <name>John Doe</name>
    <name-rest>born 1790</name-rest>
    <biography>Son of <mention ref="1">Tom Doe</mention>.</biography>
    <children>
      <child ordinal="i" id="67890">Peter Doe.</child>
      <child-continuation>He went west.</child-continuation>
    </children>
  </entry>
</register>
"#;
        assert_eq!(serialize_records(&[record()]), expected);
    }

    #[test]
    fn test_unresolved_mention_and_url() {
        let text = RichText::from_inlines(vec![
            Inline::Mention(Mention::unresolved("Ann Hill", None)),
            Inline::Text(" <see> ".to_string()),
            Inline::Url("https://example.org/?a=1&b=2".to_string()),
        ]);
        assert_eq!(
            render_rich(&text),
            "<mention unresolved=\"true\">Ann Hill</mention> &lt;see&gt; <url>https://example.org/?a=1&amp;b=2</url>"
        );
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(serialize_records(&[]), "<register>\n</register>\n");
    }
}
