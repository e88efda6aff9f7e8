//! Pattern matching with structured results for display.

use serde::Serialize;

use crate::error::ToolkitError;
use crate::pattern::engine::{Matcher, PatternEngine, RawMatch, RegexEngine};
use crate::pattern::highlight::{highlight, Segment};

/// One match of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Text of the whole match
    pub full_match: String,
    /// Offset of the match in UTF-16 code units
    pub index: usize,
    /// Offset of the match in UTF-8 bytes
    pub byte_offset: usize,
    /// Capture groups in declaration order; `None` when a group did not participate
    pub groups: Vec<Option<String>>,
}

/// Every match of a pattern plus the highlight partition of the subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub matches: Vec<MatchRecord>,
    pub segments: Vec<Segment>,
}

impl MatchResult {
    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Match `pattern` with `flags` against `subject` using the `regex` engine.
///
/// Matching is always exhaustive. An empty pattern matches nothing and is
/// not an error.
///
/// # Examples
///
/// ```
/// use devtoolkit::match_pattern;
///
/// let result = match_pattern("[a-z]+", "gi", "Hello World").unwrap();
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.matches[0].full_match, "Hello");
/// assert_eq!(result.matches[1].index, 6);
///
/// assert!(match_pattern("(", "", "x").is_err());
/// ```
pub fn match_pattern(pattern: &str, flags: &str, subject: &str) -> Result<MatchResult, ToolkitError> {
    match_with(&RegexEngine, pattern, flags, subject)
}

/// Match using any [`PatternEngine`].
pub fn match_with<E: PatternEngine + ?Sized>(
    engine: &E,
    pattern: &str,
    flags: &str,
    subject: &str,
) -> Result<MatchResult, ToolkitError> {
    if pattern.is_empty() {
        return Ok(MatchResult {
            matches: Vec::new(),
            segments: highlight(subject, &[]),
        });
    }

    let matcher = engine.compile(pattern, flags)?;
    let raw = matcher.find_all(subject);

    let spans: Vec<_> = raw.iter().map(|m| m.span.clone()).collect();
    let segments = highlight(subject, &spans);
    let matches = to_records(subject, &raw);

    Ok(MatchResult { matches, segments })
}

/// Convert byte spans to records, tracking UTF-16 offsets incrementally.
fn to_records(subject: &str, raw: &[RawMatch]) -> Vec<MatchRecord> {
    let mut records = Vec::with_capacity(raw.len());
    let mut byte_cursor = 0;
    let mut utf16_cursor = 0;

    for m in raw {
        utf16_cursor += subject[byte_cursor..m.span.start].encode_utf16().count();
        byte_cursor = m.span.start;

        records.push(MatchRecord {
            full_match: subject[m.span.clone()].to_string(),
            index: utf16_cursor,
            byte_offset: m.span.start,
            groups: m
                .groups
                .iter()
                .map(|g| g.as_ref().map(|range| subject[range.clone()].to_string()))
                .collect(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::highlight::reconstruct;

    #[test]
    fn test_reference_example() {
        let result = match_pattern("[a-z]+", "gi", "Hello World").unwrap();
        let found: Vec<_> = result
            .matches
            .iter()
            .map(|m| (m.full_match.as_str(), m.index))
            .collect();
        assert_eq!(found, vec![("Hello", 0), ("World", 6)]);
        assert_eq!(reconstruct(&result.segments), "Hello World");
    }

    #[test]
    fn test_case_sensitive_without_i() {
        let result = match_pattern("[a-z]+", "g", "Hello World").unwrap();
        let found: Vec<_> = result.matches.iter().map(|m| m.full_match.as_str()).collect();
        assert_eq!(found, vec!["ello", "orld"]);
    }

    #[test]
    fn test_groups_absent_vs_empty() {
        let result = match_pattern(r"(\d+)(x)?(-?)", "", "12 34x").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.matches[0].groups,
            vec![Some("12".to_string()), None, Some(String::new())]
        );
        assert_eq!(
            result.matches[1].groups,
            vec![Some("34".to_string()), Some("x".to_string()), Some(String::new())]
        );
    }

    #[test]
    fn test_utf16_index() {
        // '😀' is 4 bytes and 2 UTF-16 code units
        let result = match_pattern("b", "", "😀ab").unwrap();
        assert_eq!(result.matches[0].index, 3);
        assert_eq!(result.matches[0].byte_offset, 5);
    }

    #[test]
    fn test_zero_width_matches_are_reported_not_highlighted() {
        let result = match_pattern("x*", "g", "ab").unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.matches.iter().all(|m| m.full_match.is_empty()));
        assert_eq!(result.segments.len(), 1);
        assert!(!result.segments[0].matched);
    }

    #[test]
    fn test_empty_pattern() {
        let result = match_pattern("", "zz", "subject").unwrap();
        assert!(result.is_empty());
        assert_eq!(reconstruct(&result.segments), "subject");
    }
}
