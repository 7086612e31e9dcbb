//! Regex-pipeline code minification
//!
//! Each language is an ordered list of text rewrites; later rules rely on the
//! earlier ones having run. This is a best-effort rewriter, not a lexer: string
//! and regex literals that contain comment markers, operators or keywords can
//! be corrupted, and the JS keyword rule also splits identifiers that merely
//! start with a keyword (`iframe` becomes `if rame`).

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::stats::SizeDelta;

/// Source language of the code being minified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Css,
    Js,
    Html,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeKind::Css => write!(f, "css"),
            CodeKind::Js => write!(f, "js"),
            CodeKind::Html => write!(f, "html"),
        }
    }
}

impl FromStr for CodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(CodeKind::Css),
            "js" | "javascript" => Ok(CodeKind::Js),
            "html" | "htm" => Ok(CodeKind::Html),
            other => Err(format!("unknown code kind '{}' (expected css, js or html)", other)),
        }
    }
}

/// One rewrite step: every match of `pattern` becomes `replacement`
///
/// Patterns go through fancy-regex so rules can use look-around.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("minifier rule must compile"),
            replacement,
        }
    }

    fn apply(&self, text: String) -> String {
        let rewritten = match self.pattern.try_replacen(&text, 0, self.replacement) {
            Ok(Cow::Owned(rewritten)) => Some(rewritten),
            Ok(Cow::Borrowed(_)) => None,
            Err(e) => {
                log::warn!("Skipping minifier rule {}: {}", self.pattern.as_str(), e);
                None
            }
        };
        rewritten.unwrap_or(text)
    }
}

fn run(rules: &[Rule], code: &str) -> String {
    let text = rules
        .iter()
        .fold(code.to_string(), |text, rule| rule.apply(text));
    text.trim().to_string()
}

static CSS_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Block comments
        Rule::new(r"(?s)/\*.*?\*/", ""),
        // Whitespace around structural punctuation
        Rule::new(r"\s*([{}:;,>+~])\s*", "$1"),
        // Last declaration needs no semicolon
        Rule::new(r";\}", "}"),
        Rule::new(r"\s+", " "),
    ]
});

static JS_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Line comments, unless the `//` follows a colon as in `http://`
        Rule::new("(?<!:)//[^\\n\\r\u{2028}\u{2029}]*", ""),
        Rule::new(r"(?s)/\*.*?\*/", ""),
        Rule::new(r"\s*([=+\-*/<>!&|?:;,{}()\[\]])\s*", "$1"),
        Rule::new(r"\s+", " "),
        Rule::new(r"\n", ""),
        // Keep keywords from fusing with the next token
        Rule::new(
            r"(if|else|for|while|return|function|var|let|const|new)(\S)",
            "$1 $2",
        ),
    ]
});

static HTML_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(r"(?s)<!--.*?-->", ""),
        Rule::new(r">\s+<", "><"),
        Rule::new(r"\s+", " "),
        // Attribute assignments
        Rule::new(r"\s*=\s*", "="),
    ]
});

/// Minify `code` with the pipeline for `kind`
pub fn minify(code: &str, kind: CodeKind) -> String {
    let rules: &[Rule] = match kind {
        CodeKind::Css => &CSS_RULES,
        CodeKind::Js => &JS_RULES,
        CodeKind::Html => &HTML_RULES,
    };

    #[cfg(debug_assertions)]
    log::debug!("Minifying {} bytes of {} with {} rules", code.len(), kind, rules.len());

    run(rules, code)
}

/// Minify and report the size change
pub fn minify_with_stats(code: &str, kind: CodeKind) -> (String, SizeDelta) {
    let minified = minify(code, kind);
    let stats = SizeDelta::between(code, &minified);
    (minified, stats)
}

#[cfg(test)]
#[path = "minify_tests.rs"]
mod minify_tests;
