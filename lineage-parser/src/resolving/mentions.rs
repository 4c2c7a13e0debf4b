//! Mention patterns
//!
//! Finds the byte ranges of person names in plain text. Only the name is returned, never the
//! surrounding phrase, so "son of " stays plain text next to the mention.
//!
//!     Parent        "son of X", "daughter of X and Y"              (pass 1)
//!     BroadParent   as Parent, also child/stepson/stepdaughter,
//!                   any case, capitalized names only                (pass 2)
//!     Spouse        "married Y", name ends before a date or place  (both passes)
//!
//! Scanning resumes right after the last name found, not after the whole match. Rescanning the
//! text that follows a mention therefore sees exactly what the first scan saw.

use super::guards::{is_capitalized, is_linkable_name};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static PARENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:son|daughter)\s+of\s+([^.,;()]+)").unwrap());

static BROAD_PARENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:son|daughter|child|stepson|stepdaughter)\s+of\s+([^.,;()]+)").unwrap()
});

static SPOUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bmarried\s+([^.,;()\d]+)").unwrap());

/// Words that end a spouse name ("married Ann Lee in Kent").
const SPOUSE_STOPS: &[&str] = &[
    " on ", " about ", " abt ", " in ", " circa ", " at ", " before ", " after ", " and ", " who ",
    " when ",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionPattern {
    Parent,
    BroadParent,
    Spouse,
}

pub const FIRST_PASS: &[MentionPattern] = &[MentionPattern::Parent, MentionPattern::Spouse];
pub const SECOND_PASS: &[MentionPattern] = &[MentionPattern::BroadParent, MentionPattern::Spouse];

impl MentionPattern {
    fn regex(self) -> &'static Regex {
        match self {
            MentionPattern::Parent => &PARENT,
            MentionPattern::BroadParent => &BROAD_PARENT,
            MentionPattern::Spouse => &SPOUSE,
        }
    }

    /// Name ranges inside one captured phrase, relative to `text`.
    fn names(self, text: &str, capture: Range<usize>) -> Vec<Range<usize>> {
        match self {
            MentionPattern::Parent | MentionPattern::BroadParent => {
                let phrase = &text[capture.clone()];
                let mut ranges = match phrase.find(" and ") {
                    Some(at) => vec![
                        capture.start..capture.start + at,
                        capture.start + at + " and ".len()..capture.end,
                    ],
                    None => vec![capture],
                };
                for range in &mut ranges {
                    *range = trimmed(text, range.clone());
                }
                if self == MentionPattern::BroadParent {
                    ranges.retain(|range| is_capitalized(&text[range.clone()]));
                }
                ranges
            }
            MentionPattern::Spouse => {
                let phrase = &text[capture.clone()];
                let end = SPOUSE_STOPS
                    .iter()
                    .filter_map(|stop| phrase.find(stop))
                    .min()
                    .unwrap_or(phrase.len());
                let range = drop_trailing_lowercase(text, trimmed(text, capture.start..capture.start + end));
                if is_capitalized(&text[range.clone()]) {
                    vec![range]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

fn trimmed(text: &str, range: Range<usize>) -> Range<usize> {
    let slice = &text[range.clone()];
    let start = range.start + (slice.len() - slice.trim_start().len());
    let end = range.end - (slice.len() - slice.trim_end().len());
    start..end.max(start)
}

/// "Ann Lee c" -> "Ann Lee"
fn drop_trailing_lowercase(text: &str, mut range: Range<usize>) -> Range<usize> {
    while let Some(space) = text[range.clone()].rfind(' ') {
        let last = &text[range.start + space + 1..range.end];
        if is_capitalized(last) {
            break;
        }
        range = trimmed(text, range.start..range.start + space);
    }
    range
}

/// Ranges of linkable names in `text`, in order and without overlaps.
pub fn find_mentions(text: &str, patterns: &[MentionPattern]) -> Vec<Range<usize>> {
    let mut found: Vec<Range<usize>> = Vec::new();
    for &pattern in patterns {
        let regex = pattern.regex();
        let mut pos = 0;
        while pos < text.len() {
            let Some(caps) = regex.captures_at(text, pos) else {
                break;
            };
            let (Some(whole), Some(capture)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            let names: Vec<_> = pattern
                .names(text, capture.range())
                .into_iter()
                .filter(|range| !range.is_empty() && is_linkable_name(&text[range.clone()]))
                .collect();
            pos = match names.last() {
                Some(last) => last.end,
                None => whole.end(),
            };
            found.extend(names);
        }
    }

    found.sort_by_key(|range| range.start);
    let mut kept: Vec<Range<usize>> = Vec::with_capacity(found.len());
    for range in found {
        if kept.last().map_or(true, |prev| range.start >= prev.end) {
            kept.push(range);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(text: &'a str, patterns: &[MentionPattern]) -> Vec<&'a str> {
        find_mentions(text, patterns)
            .into_iter()
            .map(|range| &text[range])
            .collect()
    }

    #[test]
    fn test_parents() {
        assert_eq!(
            names("He was the son of John Doe and Mary Roe.", FIRST_PASS),
            vec!["John Doe", "Mary Roe"]
        );
        assert_eq!(
            names("She was the daughter of Tom Lee, a miller.", FIRST_PASS),
            vec!["Tom Lee"]
        );
        assert!(names("He was the son of unknown parents.", FIRST_PASS).len() == 1);
        assert!(names("He was the son of Unknown.", FIRST_PASS).is_empty());
    }

    #[test]
    fn test_spouse_name_stops_before_date_and_place() {
        assert_eq!(
            names("He married Mary Roe on 12 May 1850 in Dover", FIRST_PASS),
            vec!["Mary Roe"]
        );
        assert_eq!(names("She married Tom Lee in Kent", FIRST_PASS), vec!["Tom Lee"]);
        assert_eq!(names("He married Ann Lee c. 1850", FIRST_PASS), vec!["Ann Lee"]);
        assert!(names("He married late in life.", FIRST_PASS).is_empty());
    }

    #[test]
    fn test_spouse_and_parents_together() {
        assert_eq!(
            names("He married Mary Roe, daughter of Tom Roe and Ann Hill", FIRST_PASS),
            vec!["Mary Roe", "Tom Roe", "Ann Hill"]
        );
    }

    #[test]
    fn test_broad_parent_requires_capital() {
        assert_eq!(
            names("She was the stepdaughter of Peter Hill.", SECOND_PASS),
            vec!["Peter Hill"]
        );
        assert_eq!(names("Child of Ann Lee.", SECOND_PASS), vec!["Ann Lee"]);
        assert!(names("the son of a farmer.", SECOND_PASS).is_empty());
    }

    #[test]
    fn test_overlapping_ranges_keep_the_first() {
        let text = "He was the son of John married Ann";
        let found = find_mentions(text, FIRST_PASS);
        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].clone()], "John married Ann");
    }

    #[test]
    fn test_rescan_after_a_name_sees_the_same_tail() {
        let text = "He married Ann Lee in 1850 and then married Jane Roe.";
        assert_eq!(names(text, FIRST_PASS), vec!["Ann Lee", "Jane Roe"]);
        let tail = &text[find_mentions(text, FIRST_PASS)[0].end..];
        assert_eq!(names(tail, FIRST_PASS), vec!["Jane Roe"]);
    }
}
