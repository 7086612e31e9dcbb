//! JSON serialization
//!
//! Output matches what browsers produce for `JSON.stringify(value, null, n)`:
//! `"key": value` pairs, one entry per line when indenting, `[]`/`{}` for
//! empty containers, shortest round-trip numbers. Layout and string escaping
//! come from serde_json's formatters; only number printing is overridden.

use std::io;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

use super::value::JsonValue;

/// Widest indent honored; larger requests are clamped
pub const MAX_INDENT: usize = 10;

/// Pretty-print with `indent` spaces per level (0 is the same as [`minify`])
pub fn format(value: &JsonValue, indent: usize) -> String {
    let indent = indent.min(MAX_INDENT);
    if indent == 0 {
        return minify(value);
    }
    let unit = b" ".repeat(indent);
    write_with(value, PrettyFormatter::with_indent(&unit))
}

/// Serialize without any whitespace between tokens
pub fn minify(value: &JsonValue) -> String {
    write_with(value, CompactFormatter)
}

fn write_with<F: Formatter>(value: &JsonValue, layout: F) -> String {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, JsFormatter { layout });

    // Writing into memory with string keys only cannot fail
    if let Err(e) = value.serialize(&mut serializer) {
        log::error!("JSON serialization failed: {}", e);
        return String::new();
    }
    String::from_utf8(out).unwrap_or_default()
}

/// Wraps a layout formatter and prints numbers the way JavaScript does
struct JsFormatter<F> {
    layout: F,
}

impl<F: Formatter> Formatter for JsFormatter<F> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.layout.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.layout.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.layout.end_object_value(writer)
    }

    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(js_number(value).as_bytes())
    }
}

/// Decimal notation for magnitudes in [1e-6, 1e21), exponent notation outside
fn js_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&n.abs()) {
        return n.to_string();
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp,
    }
}
