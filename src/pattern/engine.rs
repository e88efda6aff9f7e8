//! Pattern engine capability and its `regex` crate implementation.
//!
//! Call sites only see [`PatternEngine`] and [`Matcher`], so a different
//! regex backend can be swapped in without touching them.

use std::ops::Range;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::error::ToolkitError;

/// A single match as byte spans into the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// Span of the whole match
    pub span: Range<usize>,
    /// Span of each capture group in declaration order, `None` if it did not participate
    pub groups: Vec<Option<Range<usize>>>,
}

/// A compiled pattern.
pub trait Matcher {
    /// Every non-overlapping match in `subject`, in order of position.
    ///
    /// The scan is always exhaustive, whatever the `g` flag says.
    fn find_all(&self, subject: &str) -> Vec<RawMatch>;
}

/// Something that can compile a pattern with a flag string.
pub trait PatternEngine {
    type Matcher: Matcher;

    /// Compile `pattern` with `flags`, or report the engine's diagnostic.
    fn compile(&self, pattern: &str, flags: &str) -> Result<Self::Matcher, ToolkitError>;
}

/// Parsed flag letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// `g`: accepted for compatibility, scans are always exhaustive
    pub global: bool,
    /// `i`
    pub case_insensitive: bool,
    /// `m`: `^` and `$` match at line boundaries
    pub multi_line: bool,
    /// `s`: `.` matches newlines
    pub dot_all: bool,
    /// `u`: always on in this engine
    pub unicode: bool,
    /// `y`: each match must start where the previous one ended
    pub sticky: bool,
}

impl Flags {
    /// Parse a flag string. Unknown or repeated letters are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use devtoolkit::pattern::Flags;
    ///
    /// let flags = Flags::parse("gi").unwrap();
    /// assert!(flags.global && flags.case_insensitive);
    /// assert!(Flags::parse("gg").is_err());
    /// assert!(Flags::parse("x").is_err());
    /// ```
    pub fn parse(flags: &str) -> Result<Self, ToolkitError> {
        let mut parsed = Flags::default();

        for letter in flags.chars() {
            let slot = match letter {
                'g' => &mut parsed.global,
                'i' => &mut parsed.case_insensitive,
                'm' => &mut parsed.multi_line,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                'y' => &mut parsed.sticky,
                _ => return Err(invalid_flags(flags)),
            };
            if *slot {
                return Err(invalid_flags(flags));
            }
            *slot = true;
        }

        Ok(parsed)
    }
}

fn invalid_flags(flags: &str) -> ToolkitError {
    ToolkitError::Compile(format!("invalid flags supplied: '{}'", flags))
}

/// Engine backed by the `regex` crate.
///
/// Limitations compared to ECMAScript patterns:
///
/// - Look-around (`(?=`, `(?!`, `(?<=`, `(?<!`) and backreferences (`\1`) are
///   not supported; such patterns fail with [`ToolkitError::Compile`].
/// - An empty match that starts exactly where the previous match ended is
///   skipped, so `a*` over `"ab"` yields `"a"` at 0 and `""` at 2, without
///   the extra `""` at 1.
///
/// Callers that need either behavior can supply their own [`PatternEngine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEngine;

/// A pattern compiled by [`RegexEngine`].
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
    flags: Flags,
}

impl RegexMatcher {
    /// The flags the pattern was compiled with.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    fn sticky_matches(&self, subject: &str) -> Vec<RawMatch> {
        let mut matches = Vec::new();
        let mut pos = 0;

        while pos <= subject.len() {
            let caps = match self.regex.captures_at(subject, pos) {
                Some(caps) => caps,
                None => break,
            };
            let raw = raw_match(&caps);
            if raw.span.start != pos {
                break;
            }

            pos = if raw.span.is_empty() {
                match subject[pos..].chars().next() {
                    Some(c) => pos + c.len_utf8(),
                    None => subject.len() + 1,
                }
            } else {
                raw.span.end
            };
            matches.push(raw);
        }

        matches
    }
}

fn raw_match(caps: &regex::Captures<'_>) -> RawMatch {
    // Group 0 always participates in a match
    let span = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
    let groups = caps
        .iter()
        .skip(1)
        .map(|group| group.map(|m| m.range()))
        .collect();
    RawMatch { span, groups }
}

impl Matcher for RegexMatcher {
    fn find_all(&self, subject: &str) -> Vec<RawMatch> {
        if self.flags.sticky {
            return self.sticky_matches(subject);
        }
        self.regex
            .captures_iter(subject)
            .map(|caps| raw_match(&caps))
            .collect()
    }
}

impl PatternEngine for RegexEngine {
    type Matcher = RegexMatcher;

    fn compile(&self, pattern: &str, flags: &str) -> Result<RegexMatcher, ToolkitError> {
        let parsed = Flags::parse(flags)?;

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(parsed.case_insensitive)
            .multi_line(parsed.multi_line)
            .dot_matches_new_line(parsed.dot_all)
            .build()
            .map_err(|e| ToolkitError::Compile(e.to_string()))?;

        debug!(
            "compiled pattern with {} capture groups",
            regex.captures_len().saturating_sub(1)
        );

        Ok(RegexMatcher {
            regex,
            flags: parsed,
        })
    }
}
