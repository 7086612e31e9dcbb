//! JSON structural analysis
//!
//! Parsing into a [`JsonValue`] tree, pretty-printing and minifying it, and the
//! structural statistics reported alongside (key count, nesting depth, sizes).

mod parser;
mod value;
mod writer;

use serde::Serialize;

pub use parser::{MAX_NESTING, ParseError, parse};
pub use value::{JsonObject, JsonValue};
pub use writer::{MAX_INDENT, format, minify};

use crate::stats::byte_size;

/// Indent width used when none is configured
pub const DEFAULT_INDENT: usize = 2;

/// Output layout for [`analyze`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonMode {
    Format { indent: usize },
    Minify,
}

/// Statistics reported with every formatted or minified document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonStats {
    /// Every key occurrence anywhere in the tree
    pub keys: usize,
    pub depth: usize,
    /// Bytes of the produced output
    pub output_size: usize,
    /// Bytes of the text that was parsed
    pub original_size: usize,
}

/// A formatted or minified document together with its statistics
#[derive(Debug, Clone, PartialEq)]
pub struct JsonReport {
    pub value: JsonValue,
    pub output: String,
    pub stats: JsonStats,
}

/// Parse `text` and re-serialize it according to `mode`
///
/// # Examples
/// ```
/// use textkit::json::{analyze, JsonMode};
///
/// let report = analyze(r#"{"a": [1, {"b": 2}]}"#, JsonMode::Minify).unwrap();
/// assert_eq!(report.output, r#"{"a":[1,{"b":2}]}"#);
/// assert_eq!(report.stats.keys, 2);
/// assert_eq!(report.stats.depth, 3);
/// ```
pub fn analyze(text: &str, mode: JsonMode) -> Result<JsonReport, ParseError> {
    let value = parse(text)?;
    let output = match mode {
        JsonMode::Format { indent } => format(&value, indent),
        JsonMode::Minify => minify(&value),
    };

    let stats = JsonStats {
        keys: count_keys(&value),
        depth: compute_depth(&value),
        output_size: byte_size(&output),
        original_size: byte_size(text),
    };

    #[cfg(debug_assertions)]
    log::debug!(
        "json {:?}: {} keys, depth {}, {} -> {} bytes",
        mode,
        stats.keys,
        stats.depth,
        stats.original_size,
        stats.output_size
    );

    Ok(JsonReport {
        value,
        output,
        stats,
    })
}

/// Count every key occurrence in the tree, nested ones included
///
/// Scalars contribute nothing, arrays the sum of their elements, objects one
/// per entry plus whatever the entry's value contains.
pub fn count_keys(value: &JsonValue) -> usize {
    match value {
        JsonValue::Array(items) => items.iter().map(count_keys).sum(),
        JsonValue::Object(object) => object.values().map(|v| 1 + count_keys(v)).sum(),
        _ => 0,
    }
}

/// Nesting depth of the tree
///
/// Scalars have depth 0, empty containers 1, and a non-empty container is one
/// deeper than its deepest child.
pub fn compute_depth(value: &JsonValue) -> usize {
    depth_from(value, 0)
}

fn depth_from(value: &JsonValue, depth: usize) -> usize {
    match value {
        JsonValue::Array(items) => items
            .iter()
            .map(|item| depth_from(item, depth + 1))
            .max()
            .unwrap_or(depth + 1),
        JsonValue::Object(object) => object
            .values()
            .map(|v| depth_from(v, depth + 1))
            .max()
            .unwrap_or(depth + 1),
        _ => depth,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod json_tests;
