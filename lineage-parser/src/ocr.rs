//! OCR cleanup
//!
//! Scanned registers come back with typographic quotes and dashes. Patterns and name matching
//! work on ASCII punctuation, so these are folded before segmentation.

const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{201c}', "\""),
    ('\u{201d}', "\""),
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{2013}', "-"),
    ('\u{2014}', "--"),
    ('\u{00a0}', " "),
];

pub fn clean_ocr_text(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for c in source.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}
