//! Strict JSON parsing
//!
//! serde_json does the parsing; this module converts its tree into a
//! [`JsonValue`] and its errors into a [`ParseError`] with character offsets.
//! No partial tree is ever returned.

use serde_json::error::Category;
use thiserror::Error;

use super::value::JsonValue;

/// Deepest container nesting accepted (serde_json's recursion limit)
pub const MAX_NESTING: usize = 127;

/// Malformed JSON
///
/// `position` is a zero-based character offset; `line` and `column` are
/// one-based and count characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line} column {column} (position {position})")]
pub struct ParseError {
    pub position: usize,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl ParseError {
    fn from_serde(src: &str, err: &serde_json::Error) -> Self {
        let byte_pos = if err.classify() == Category::Eof {
            src.len()
        } else {
            byte_offset(src, err.line(), err.column())
        };

        let suffix = format!(" at line {} column {}", err.line(), err.column());
        let full = err.to_string();
        let message = full.strip_suffix(suffix.as_str()).unwrap_or(&full).to_string();

        Self::at(src, byte_pos, message)
    }

    fn at(src: &str, byte_pos: usize, message: String) -> Self {
        let before = &src[..byte_pos];
        let line_start = memchr::memrchr(b'\n', before.as_bytes()).map_or(0, |i| i + 1);

        Self {
            position: before.chars().count(),
            line: memchr::memchr_iter(b'\n', before.as_bytes()).count() + 1,
            column: before[line_start..].chars().count() + 1,
            message,
        }
    }
}

/// Byte index of the character serde_json blamed
///
/// serde_json reports a one-based line and a byte column that points just past
/// the offending byte (0 when the error sits at the start of a line).
fn byte_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start = match line {
        0 | 1 => 0,
        n => memchr::memchr_iter(b'\n', src.as_bytes())
            .nth(n - 2)
            .map_or(src.len(), |i| i + 1),
    };

    let mut pos = (line_start + column.saturating_sub(1)).min(src.len());
    while !src.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Parse a complete JSON document
pub fn parse(text: &str) -> Result<JsonValue, ParseError> {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => Ok(JsonValue::from(value)),
        Err(e) => {
            #[cfg(debug_assertions)]
            log::debug!("JSON rejected: {}", e);
            Err(ParseError::from_serde(text, &e))
        }
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
