//! Mention guards
//!
//! Pattern matches are cheap and often wrong. A captured phrase only becomes a mention when it
//! plausibly names a person: placeholders ("unknown"), dates and places ("in Kent", "1820") stay
//! plain text.

use crate::names::normalize_name;
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

static PLACE_OR_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:on|in|about|from|at)\s").unwrap());

const PLACEHOLDER_NAMES: &[&str] = &["unknown", "unnamed"];

/// Whether `name` should become a mention.
pub fn is_linkable_name(name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || !name.chars().any(char::is_alphabetic) {
        return false;
    }
    if PLACEHOLDER_NAMES.iter().any(|p| name.eq_ignore_ascii_case(p)) {
        return false;
    }
    if PLACE_OR_DATE.is_match(name) || YEAR.is_match(name) {
        return false;
    }
    !normalize_name(name).is_empty()
}

/// Whether `name` starts with a capital letter.
pub fn is_capitalized(name: &str) -> bool {
    name.trim_start().chars().next().is_some_and(char::is_uppercase)
}
