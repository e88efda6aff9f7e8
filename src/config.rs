//! Policy constants and formatting options shared by the engines.
//!
//! Nothing here is read from the environment: these are fixed policies of
//! the toolkit, not user settings.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Settle delay before the digest pipeline recomputes after an edit.
pub const DIGEST_DEBOUNCE: Duration = Duration::from_millis(200);

/// Number of generated UUIDs kept in the history, most recent first.
pub const UUID_HISTORY_LIMIT: usize = 10;

/// Smallest paragraph count the lorem generator produces.
pub const LOREM_MIN_PARAGRAPHS: usize = 1;

/// Largest paragraph count the lorem generator produces.
pub const LOREM_MAX_PARAGRAPHS: usize = 10;

/// Paragraph count used when the caller has not picked one.
pub const LOREM_DEFAULT_PARAGRAPHS: usize = 3;

/// Sentences per lorem paragraph.
pub const LOREM_SENTENCES: RangeInclusive<usize> = 4..=7;

/// Words per lorem sentence.
pub const LOREM_WORDS: RangeInclusive<usize> = 5..=14;

/// Layout options for the JSON and XML beautifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per nesting level
    pub indent_width: usize,
}

impl FormatOptions {
    /// Create options with the given indentation width.
    pub fn with_indent(indent_width: usize) -> Self {
        Self { indent_width }
    }

    /// The indentation string for one nesting level.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}
