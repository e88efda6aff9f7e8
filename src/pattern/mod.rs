//! Regular expression matching for the regex tester.
//!
//! - Engine capability ([`PatternEngine`]) and the `regex` backed engine
//! - Match records with capture groups
//! - Highlight partition of the subject

pub mod engine;
pub mod highlight;
pub mod matcher;

// Re-export main functionality
pub use engine::{Flags, Matcher, PatternEngine, RawMatch, RegexEngine, RegexMatcher};
pub use highlight::{highlight, reconstruct, Segment};
pub use matcher::{match_pattern, match_with, MatchRecord, MatchResult};
