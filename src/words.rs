//! Word, sentence and paragraph statistics for plain text

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Average reading speed used for `reading_time_minutes`
pub const WORDS_PER_MINUTE: f64 = 200.0;

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern must compile"));

// A whitespace run holding at least one blank line
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern must compile"));

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub reading_time_minutes: f64,
}

pub fn analyze(text: &str) -> TextStats {
    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
    let words = text.split_whitespace().count();

    TextStats {
        characters,
        characters_no_spaces,
        words,
        sentences: count_segments(&SENTENCE_BREAK, text),
        paragraphs: count_segments(&PARAGRAPH_BREAK, text),
        lines: count_lines(text),
        reading_time_minutes: words as f64 / WORDS_PER_MINUTE,
    }
}

fn count_segments(separator: &Regex, text: &str) -> usize {
    separator
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let breaks = memchr::memchr_iter(b'\n', text.as_bytes()).count();
    if text.ends_with('\n') { breaks } else { breaks + 1 }
}

/// Short label for a reading time: `"< 1 min"`, `"4 min"` or `"2h 5m"`
pub fn format_reading_time(minutes: f64) -> String {
    if minutes < 1.0 {
        "< 1 min".to_string()
    } else if minutes < 60.0 {
        format!("{} min", minutes.round())
    } else {
        let hours = (minutes / 60.0).floor();
        format!("{}h {}m", hours, (minutes % 60.0).round())
    }
}
