//! Biography assembly and splitting
//!
//! A long biography is rendered as two segments. The split point is the last sentence end
//! (". ") within the first `threshold` characters, or the last clause break (", ") when there is
//! none. Without either, the biography stays whole.

/// Byte offset where the second segment starts, if the text should be split.
pub fn split_point(text: &str, threshold: usize) -> Option<usize> {
    let limit = text.char_indices().nth(threshold).map(|(idx, _)| idx)?;
    let window = &text[..limit];
    window
        .rfind(". ")
        .or_else(|| window.rfind(", "))
        .map(|idx| idx + 1)
}

/// Split the biography into one or two segments. An empty biography has none.
pub fn split_biography(text: &str, threshold: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if let Some(at) = split_point(text, threshold) {
        let (first, second) = text.split_at(at);
        let (first, second) = (first.trim_end(), second.trim_start());
        if !first.is_empty() && !second.is_empty() {
            return vec![first.to_string(), second.to_string()];
        }
    }
    vec![text.to_string()]
}

/// Join biography lines with single spaces.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
