//! LaTeX escaping

/// Escape characters that are special in LaTeX text mode.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a URL for `\url{}`. Only characters that break the argument when it is nested in
/// another macro are touched.
pub fn escape_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        if matches!(c, '%' | '#' | '{' | '}' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
