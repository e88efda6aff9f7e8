//! Partition of a subject into matched and unmatched segments.

use std::ops::Range;

use serde::Serialize;

/// A run of subject text, marked if it belongs to a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Split `subject` around the given match spans.
///
/// Spans must be ordered, non-overlapping byte ranges on char boundaries.
/// Empty spans produce no segment, and no segment is ever empty.
/// Concatenating the segments gives back `subject`.
///
/// # Examples
///
/// ```
/// use devtoolkit::pattern::highlight;
///
/// let segments = highlight("Hello World", &[0..5, 6..11]);
/// let texts: Vec<_> = segments.iter().map(|s| (s.text.as_str(), s.matched)).collect();
/// assert_eq!(texts, vec![("Hello", true), (" ", false), ("World", true)]);
/// ```
pub fn highlight(subject: &str, spans: &[Range<usize>]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for span in spans.iter().filter(|span| !span.is_empty()) {
        if span.start > cursor {
            segments.push(Segment::plain(&subject[cursor..span.start]));
        }
        segments.push(Segment::marked(&subject[span.clone()]));
        cursor = span.end;
    }

    if cursor < subject.len() {
        segments.push(Segment::plain(&subject[cursor..]));
    }

    segments
}

/// Rebuild the subject from its segments.
pub fn reconstruct(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
