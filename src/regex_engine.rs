//! Regular-expression match extraction
//!
//! Wraps `fancy-regex` (backreferences and look-around on top of the `regex`
//! crate) and adds the global-search loop of a regex tester: every match is
//! located left to right, with empty matches forcing the cursor forward.

mod highlight;
mod presets;

use std::ops::Range;

use fancy_regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub use highlight::{Segment, escape_html, highlight_ansi, highlight_html, segments};
pub use presets::{EXAMPLES, RegexExample, example};

/// Malformed pattern, or a pattern the engine gave up on while matching
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("{0}")]
    Compile(String),

    #[error("matching failed: {0}")]
    Runtime(String),
}

/// Matching options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexFlags {
    /// Find every match instead of only the first
    pub global: bool,
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries
    pub multiline: bool,
}

impl Default for RegexFlags {
    fn default() -> Self {
        Self {
            global: true,
            case_insensitive: false,
            multiline: false,
        }
    }
}

/// A pattern source plus the flags to compile it with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    pub source: String,
    pub flags: RegexFlags,
}

impl PatternSpec {
    pub fn new(source: impl Into<String>, flags: RegexFlags) -> Self {
        Self {
            source: source.into(),
            flags,
        }
    }

    /// Compile against the host engine
    ///
    /// Flags become an inline group in front of the source, so diagnostic
    /// positions include that prefix.
    pub fn compile(&self) -> Result<CompiledPattern, PatternError> {
        let inline = match (self.flags.case_insensitive, self.flags.multiline) {
            (true, true) => "(?im)",
            (true, false) => "(?i)",
            (false, true) => "(?m)",
            (false, false) => "",
        };

        let regex = Regex::new(&format!("{}{}", inline, self.source)).map_err(|e| {
            #[cfg(debug_assertions)]
            log::debug!("Pattern {:?} rejected: {}", self.source, e);
            PatternError::Compile(e.to_string())
        })?;

        Ok(CompiledPattern {
            regex,
            global: self.flags.global,
        })
    }
}

/// One located match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub value: String,
    /// Character offset of the match start
    pub index: usize,
    /// Byte range of the match in the subject
    pub span: Range<usize>,
    /// Capture groups in declaration order, `None` when a group did not take part
    pub groups: Vec<Option<String>>,
}

/// A pattern ready to run against any number of subjects
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
    global: bool,
}

impl CompiledPattern {
    /// Locate matches in `subject`
    ///
    /// Without the global flag at most one match is returned. With it, each
    /// search resumes at the end of the previous match; an empty match at the
    /// resume point advances the cursor by one character, and the loop stops
    /// once the cursor passes the end of the subject.
    pub fn find_all(&self, subject: &str) -> Result<Vec<MatchRecord>, PatternError> {
        let mut matches = Vec::new();
        let mut pos = 0;
        // Byte offset / character offset pair for incremental index conversion
        let mut counted = (0usize, 0usize);

        while pos <= subject.len() {
            let caps = match self.regex.captures_from_pos(subject, pos) {
                Ok(Some(caps)) => caps,
                Ok(None) => break,
                Err(e) => return Err(PatternError::Runtime(e.to_string())),
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            counted.1 += subject[counted.0..whole.start()].chars().count();
            counted.0 = whole.start();

            matches.push(MatchRecord {
                value: whole.as_str().to_string(),
                index: counted.1,
                span: whole.start()..whole.end(),
                groups: (1..caps.len())
                    .map(|i| caps.get(i).map(|g| g.as_str().to_string()))
                    .collect(),
            });

            if !self.global {
                break;
            }

            pos = whole.end();
            if whole.start() == pos {
                match subject[pos..].chars().next() {
                    Some(ch) => pos += ch.len_utf8(),
                    None => break,
                }
            }
        }

        Ok(matches)
    }
}

/// Compile `pattern` and collect its matches in `subject`
///
/// An empty pattern source yields no matches rather than an empty match at
/// every position. An empty subject yields no matches either, though the
/// pattern is still compiled so syntax errors are reported.
///
/// # Examples
/// ```
/// use textkit::regex_engine::{find_matches, PatternSpec, RegexFlags};
///
/// let spec = PatternSpec::new("a+", RegexFlags::default());
/// let found = find_matches(&spec, "aaa bb aaa").unwrap();
/// let indices: Vec<usize> = found.iter().map(|m| m.index).collect();
/// assert_eq!(indices, vec![0, 7]);
/// ```
pub fn find_matches(pattern: &PatternSpec, subject: &str) -> Result<Vec<MatchRecord>, PatternError> {
    if pattern.source.is_empty() {
        return Ok(Vec::new());
    }
    let compiled = pattern.compile()?;
    if subject.is_empty() {
        return Ok(Vec::new());
    }
    compiled.find_all(subject)
}

#[cfg(test)]
#[path = "regex_engine_tests.rs"]
mod regex_engine_tests;
