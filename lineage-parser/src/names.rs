//! Name normalization
//!
//! Registry keys are built from display names by:
//!
//!     1. dropping apostrophes ("O'Brien" and "OBrien" are the same key)
//!     2. lowercasing
//!     3. turning every other non-alphanumeric character into a space
//!     4. dropping title and suffix tokens (see [STRIPPED_TOKENS])
//!     5. collapsing whitespace
//!
//! Tokens are only ever dropped whole. A surname such as "Parsr" keeps its trailing "sr"; only a
//! standalone "Sr." goes away. The result contains nothing the steps above would change, so
//! normalizing a key again returns it unchanged.

/// Titles, honorifics and generational suffixes ignored when matching names.
pub const STRIPPED_TOKENS: &[&str] = &[
    "sir", "lady", "lord", "count", "countess", "duke", "duchess", "baron", "baroness", "mr", "mrs",
    "miss", "dr", "rev", "jr", "sr", "i", "ii", "iii", "iv", "v",
];

fn is_stripped_token(token: &str) -> bool {
    STRIPPED_TOKENS.contains(&token)
}

/// Canonical matching key for a person name.
pub fn normalize_name(name: &str) -> String {
    let folded: String = name
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    folded
        .split_whitespace()
        .filter(|token| !is_stripped_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove single-letter tokens between the first and last token of a normalized key.
///
/// Returns `None` when the key has no middle initial, so callers can tell whether a second key is
/// worth storing.
pub fn strip_middle_initials(key: &str) -> Option<String> {
    let tokens: Vec<&str> = key.split_whitespace().collect();
    if tokens.len() < 3 {
        return None;
    }
    let last = tokens.len() - 1;
    let kept: Vec<&str> = tokens
        .iter()
        .enumerate()
        .filter(|(idx, token)| *idx == 0 || *idx == last || token.chars().count() > 1)
        .map(|(_, token)| *token)
        .collect();
    if kept.len() == tokens.len() {
        None
    } else {
        Some(kept.join(" "))
    }
}

/// Split a header display name into its head and optional descriptive rest.
///
/// `"John Doe, born 1820"` gives `("John Doe", Some("born 1820"))`.
pub fn split_display_name(full: &str) -> (&str, Option<&str>) {
    match full.split_once(',') {
        Some((head, rest)) => {
            let rest = rest.trim();
            (head.trim(), (!rest.is_empty()).then_some(rest))
        }
        None => (full.trim(), None),
    }
}
