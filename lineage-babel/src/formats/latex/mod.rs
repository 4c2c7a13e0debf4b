//! LaTeX output
//!
//! Emits one block per record using the register document class macros:
//!
//! ```text
//! \generationtitle{Third Generation}
//! \entry{12345}{\textbf{Jane Doe}, born 1801}{first segment}{second segment}
//! \marriage{She married \hyperlink{person3}{...}}
//! \childrenheadingplural
//! \childentrylinked{67890}{i}{...}
//! \childentry{}{ii}{...}
//! \childentryplain{...}{ii}{}
//! \dividerline
//! ```
//!
//! Resolved mentions link to their entry's `person<ID>` anchor; unresolved ones keep the same
//! styling with a dead `\href{#}` so they stand out in proofs. Blocks are separated by a blank
//! line. All prose is escaped; see [escape].

mod escape;

pub use escape::{escape_latex, escape_url};

use crate::common::{child_ordinals, roman::to_roman};
use crate::error::FormatError;
use crate::format::Format;
use lineage_parser::{ChildRef, Inline, Mention, PersonRecord, RichText, Target};

/// Render rich text, escaping plain runs.
pub fn render_rich(text: &RichText) -> String {
    let mut out = String::new();
    for inline in text.inlines() {
        match inline {
            Inline::Text(plain) => out.push_str(&escape_latex(plain)),
            Inline::Mention(mention) => out.push_str(&render_mention(mention)),
            Inline::Url(url) => {
                out.push_str("\\url{");
                out.push_str(&escape_url(url));
                out.push('}');
            }
        }
    }
    out
}

fn render_mention(mention: &Mention) -> String {
    let styled = format!(
        "{{\\textcolor{{accent}}{{\\textbf{{\\underline{{{}}}}}}}}}",
        escape_latex(&mention.name)
    );
    match &mention.target {
        Target::Resolved(id) => format!("\\hyperlink{{person{}}}{}", id, styled),
        Target::Unresolved { .. } => format!("\\href{{#}}{}", styled),
    }
}

fn render_child(child: &ChildRef, ordinal: usize) -> String {
    let roman = to_roman(ordinal);
    let text = render_rich(&child.text);
    match (&child.id, child.is_linked, child.has_ordinal) {
        (Some(id), true, _) => format!("\\childentrylinked{{{}}}{{{}}}{{{}}}\n", id, roman, text),
        (_, _, true) => format!("\\childentry{{}}{{{}}}{{{}}}\n", roman, text),
        (_, _, false) => format!("\\childentryplain{{{}}}{{{}}}{{}}\n", text, roman),
    }
}

/// One record as a LaTeX block, ending with `\dividerline`.
pub fn render_record(record: &PersonRecord) -> String {
    let mut block = String::new();

    if let Some(generation) = &record.generation {
        block.push_str(&format!("\\generationtitle{{{}}}\n", escape_latex(generation)));
    }

    let mut name = format!("\\textbf{{{}}}", escape_latex(&record.name.head));
    if let Some(rest) = &record.name.rest {
        name.push_str(", ");
        name.push_str(&escape_latex(rest));
    }
    block.push_str(&format!("\\entry{{{}}}{{{}}}", record.id, name));
    if record.biography.segments.is_empty() {
        block.push_str("{}");
    }
    for segment in &record.biography.segments {
        block.push('{');
        block.push_str(&render_rich(segment));
        block.push('}');
    }
    block.push('\n');

    if let Some(marriage) = &record.marriage {
        block.push_str(&format!("\\marriage{{{}}}\n", render_rich(&marriage.text)));
    }

    if !record.children.is_empty() {
        if record.children.len() == 1 {
            block.push_str("\\childrenheadingsingular\n");
        } else {
            block.push_str("\\childrenheadingplural\n");
        }
        let ordinals = child_ordinals(&record.children);
        for (child, ordinal) in record.children.iter().zip(ordinals) {
            block.push_str(&render_child(child, ordinal));
        }
    }

    block.push_str("\\dividerline\n");
    block
}

/// Serialize records to LaTeX, one block per record.
pub fn serialize_records(records: &[PersonRecord]) -> String {
    records
        .iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format implementation for the LaTeX register macros
pub struct LatexFormat;

impl Format for LatexFormat {
    fn name(&self) -> &str {
        "latex"
    }

    fn description(&self) -> &str {
        "LaTeX using the register entry macros"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tex", "latex"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, records: &[PersonRecord]) -> Result<String, FormatError> {
        Ok(serialize_records(records))
    }
}
