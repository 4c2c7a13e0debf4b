//! Marriage collection
//!
//! Every marriage line becomes one statement, in order. The first statement is the primary
//! marriage; the rest are auxiliary and end up in the biography (see [MarriageCollector::finish]).

/// Characters dropped from the end of the primary marriage.
const TRAILING_PUNCTUATION: &[char] = &[',', '.'];

#[derive(Debug, Clone, Default)]
pub struct MarriageCollector {
    statements: Vec<String>,
}

/// Primary marriage and auxiliary ones, as returned by [MarriageCollector::finish].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedMarriages {
    pub primary: Option<String>,
    pub auxiliary: Vec<String>,
}

impl MarriageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marriage line, joined with its date/place continuation when there is one.
    pub fn push(&mut self, line: &str, continuation: Option<&str>) {
        let mut statement = line.trim().to_string();
        if let Some(next) = continuation {
            let next = next.trim();
            if !next.starts_with(',') {
                statement.push(' ');
            }
            statement.push_str(next);
        }
        self.statements.push(statement);
    }

    pub fn finish(self) -> CollectedMarriages {
        let mut statements = self.statements.into_iter();
        let primary = statements
            .next()
            .map(|s| s.trim_end_matches(TRAILING_PUNCTUATION).trim_end().to_string())
            .filter(|s| !s.is_empty());
        CollectedMarriages {
            primary,
            auxiliary: statements.collect(),
        }
    }
}

/// Sentence form of an auxiliary marriage for the biography.
///
/// Fragments that start lowercase ("next married Ann Lee in 1860") get the person's name in
/// front; full sentences ("He next married ...") are kept as they are.
pub fn auxiliary_sentence(statement: &str, head_name: &str) -> String {
    let statement = statement.trim();
    match statement.chars().next() {
        Some(c) if c.is_lowercase() && !head_name.is_empty() => format!("{} {}", head_name, statement),
        _ => statement.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuation_is_joined() {
        let mut collector = MarriageCollector::new();
        collector.push("He married Mary Roe", Some("on 12 May 1850 in Kent."));
        let marriages = collector.finish();
        assert_eq!(
            marriages.primary.as_deref(),
            Some("He married Mary Roe on 12 May 1850 in Kent")
        );
        assert!(marriages.auxiliary.is_empty());
    }

    #[test]
    fn test_comma_continuation_has_no_extra_space() {
        let mut collector = MarriageCollector::new();
        collector.push("He married Mary Roe", Some(", daughter of Tom Roe."));
        assert_eq!(
            collector.finish().primary.as_deref(),
            Some("He married Mary Roe, daughter of Tom Roe")
        );
    }

    #[test]
    fn test_first_marriage_is_primary() {
        let mut collector = MarriageCollector::new();
        collector.push("He married Mary Roe.", None);
        collector.push("He next married Ann Lee in 1860.", None);
        let marriages = collector.finish();
        assert_eq!(marriages.primary.as_deref(), Some("He married Mary Roe"));
        assert_eq!(marriages.auxiliary, vec!["He next married Ann Lee in 1860."]);
    }

    #[test]
    fn test_auxiliary_sentence() {
        assert_eq!(
            auxiliary_sentence("next married Ann Lee.", "John Doe"),
            "John Doe next married Ann Lee."
        );
        assert_eq!(
            auxiliary_sentence("He next married Ann Lee.", "John Doe"),
            "He next married Ann Lee."
        );
    }
}
