//! Plain text and lightweight markdown to HTML
//!
//! The markdown flavour is a handful of ordered regex rewrites over the raw
//! text. It does not escape its input and does not handle nesting beyond what
//! the rule order happens to produce.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlFormat {
    #[default]
    Basic,
    Markdown,
}

impl fmt::Display for HtmlFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlFormat::Basic => write!(f, "basic"),
            HtmlFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for HtmlFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" | "text" => Ok(HtmlFormat::Basic),
            "markdown" | "md" => Ok(HtmlFormat::Markdown),
            other => Err(format!("unknown format '{}' (expected basic or markdown)", other)),
        }
    }
}

struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

impl Rewrite {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("markdown rule must compile"),
            replacement,
        }
    }
}

static MARKDOWN_RULES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        Rewrite::new(r"(?m)^### (.+)$", "<h3>$1</h3>"),
        Rewrite::new(r"(?m)^## (.+)$", "<h2>$1</h2>"),
        Rewrite::new(r"(?m)^# (.+)$", "<h1>$1</h1>"),
        Rewrite::new(r"\*\*\*(.+?)\*\*\*", "<strong><em>$1</em></strong>"),
        Rewrite::new(r"\*\*(.+?)\*\*", "<strong>$1</strong>"),
        Rewrite::new(r"\*(.+?)\*", "<em>$1</em>"),
        Rewrite::new(r"(?s)```(.+?)```", "<pre><code>$1</code></pre>"),
        Rewrite::new(r"`(.+?)`", "<code>$1</code>"),
        Rewrite::new(r"\[(.+?)\]\((.+?)\)", r#"<a href="$2">$1</a>"#),
    ]
});

pub fn to_html(text: &str, format: HtmlFormat) -> String {
    match format {
        HtmlFormat::Basic => basic(text),
        HtmlFormat::Markdown => markdown(text),
    }
}

fn basic(text: &str) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace("\n\n", "</p><p>")
        .replace('\n', "<br>");
    format!("<p>{}</p>", escaped)
}

fn markdown(text: &str) -> String {
    let rewritten = MARKDOWN_RULES.iter().fold(text.to_string(), |html, rule| {
        rule.pattern.replace_all(&html, rule.replacement).into_owned()
    });

    let listed = group_list_items(&rewritten);

    listed
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| {
            if block.starts_with('<') {
                block.to_string()
            } else {
                format!("<p>{}</p>", block)
            }
        })
        .collect()
}

/// Turn consecutive `- item` lines into one `<ul>` block
fn group_list_items(html: &str) -> String {
    let mut lines = Vec::new();
    let mut in_list = false;

    for line in html.split('\n') {
        match line.trim().strip_prefix("- ") {
            Some(item) => {
                if !in_list {
                    lines.push("<ul>".to_string());
                    in_list = true;
                }
                lines.push(format!("<li>{}</li>", item));
            }
            None => {
                if in_list {
                    lines.push("</ul>".to_string());
                    in_list = false;
                }
                lines.push(line.to_string());
            }
        }
    }
    if in_list {
        lines.push("</ul>".to_string());
    }

    lines.join("\n")
}
