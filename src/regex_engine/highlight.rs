//! Match highlighting
//!
//! The subject is cut into alternating literal and matched spans, then
//! rendered either as escaped HTML with `<mark>` around matches or as
//! terminal-styled text.

use crossterm::style::Stylize;

use super::MatchRecord;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// A piece of the subject, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Matched(&'a str),
}

/// Partition `subject` around `matches`
///
/// `matches` must come from a left-to-right search of this same subject.
/// Empty literal spans are omitted; empty matches are kept so that every match
/// has a segment.
pub fn segments<'a>(subject: &'a str, matches: &[MatchRecord]) -> Vec<Segment<'a>> {
    let mut parts = Vec::with_capacity(matches.len() * 2 + 1);
    let mut last = 0;

    for m in matches {
        if m.span.start > last {
            parts.push(Segment::Literal(&subject[last..m.span.start]));
        }
        parts.push(Segment::Matched(&subject[m.span.clone()]));
        last = m.span.end;
    }

    if last < subject.len() {
        parts.push(Segment::Literal(&subject[last..]));
    }

    parts
}

/// Escape text for embedding in HTML, line breaks become `<br>`
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '\n' => out.push_str("<br>"),
            c => out.push(c),
        }
    }
    out
}

/// Escaped HTML with every match wrapped in `<mark>`
pub fn highlight_html(subject: &str, matches: &[MatchRecord]) -> String {
    let mut out = String::with_capacity(subject.len() + matches.len() * 16);
    for segment in segments(subject, matches) {
        match segment {
            Segment::Literal(text) => out.push_str(&escape_html(text)),
            Segment::Matched(text) => {
                out.push_str(MARK_OPEN);
                out.push_str(&escape_html(text));
                out.push_str(MARK_CLOSE);
            }
        }
    }
    out
}

/// Subject with matches styled for a terminal
pub fn highlight_ansi(subject: &str, matches: &[MatchRecord]) -> String {
    segments(subject, matches)
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text.to_string(),
            Segment::Matched("") => String::new(),
            Segment::Matched(text) => text.black().on_yellow().to_string(),
        })
        .collect()
}
