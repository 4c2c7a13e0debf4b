//! URL detection
//!
//! Registers cite sources as `<https://...>` or as bare links. Both become [Inline::Url]; the
//! angle brackets are dropped and trailing sentence punctuation stays in the text.

use crate::ast::Inline;
use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(https?://[^>\s]+)>|(https?://[^\s<>]+)").unwrap());

const TRAILING: &[char] = &['.', ',', ';', ':', ')'];

/// Split text into plain and URL inlines.
pub fn split_urls(text: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut last = 0;
    for caps in URL.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let (url, tail) = match (caps.get(1), caps.get(2)) {
            (Some(bracketed), _) => (bracketed.as_str(), ""),
            (None, Some(bare)) => {
                let url = bare.as_str().trim_end_matches(TRAILING);
                (url, &bare.as_str()[url.len()..])
            }
            (None, None) => continue,
        };
        if whole.start() > last {
            inlines.push(Inline::Text(text[last..whole.start()].to_string()));
        }
        inlines.push(Inline::Url(url.to_string()));
        if !tail.is_empty() {
            inlines.push(Inline::Text(tail.to_string()));
        }
        last = whole.end();
    }
    if last < text.len() {
        inlines.push(Inline::Text(text[last..].to_string()));
    }
    inlines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_and_bare() {
        assert_eq!(
            split_urls("See <https://example.org/a> and http://example.org/b."),
            vec![
                Inline::Text("See ".into()),
                Inline::Url("https://example.org/a".into()),
                Inline::Text(" and ".into()),
                Inline::Url("http://example.org/b".into()),
                Inline::Text(".".into()),
            ]
        );
    }

    #[test]
    fn test_no_urls() {
        assert_eq!(split_urls("plain"), vec![Inline::Text("plain".into())]);
        assert!(split_urls("").is_empty());
    }
}
