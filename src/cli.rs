//! Command-line surface
//!
//! Argument definitions plus [`execute`], which runs one command and returns
//! everything the binary prints. Nothing in here writes to stdout itself.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use crate::base64_codec;
use crate::config::Config;
use crate::error::TextkitError;
use crate::html::{HtmlFormat, to_html};
use crate::input::InputReader;
use crate::json::{self as json_doc, JsonMode};
use crate::lorem::{LoremGenerator, LoremUnit};
use crate::minify::{CodeKind, minify_with_stats};
use crate::regex_engine::{self, PatternSpec, highlight_ansi, highlight_html};
use crate::stats::format_bytes;
use crate::words::{self, format_reading_time};

/// Text analysis and transformation toolkit
#[derive(Parser, Debug)]
#[command(
    name = "textkit",
    version,
    about = "Regex tester, JSON formatter, code minifier, lorem ipsum and word statistics"
)]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Also copy the primary output to the clipboard
    #[arg(long, global = true)]
    pub copy: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List and highlight regex matches
    Regex(RegexArgs),

    /// Format or minify a JSON document
    Json {
        #[command(subcommand)]
        action: JsonAction,
    },

    /// Minify CSS, JavaScript or HTML
    Minify {
        /// css, js or html
        kind: CodeKind,

        /// Input file (if not provided, reads from stdin)
        input: Option<PathBuf>,

        /// Report original and minified sizes on stderr
        #[arg(long)]
        stats: bool,
    },

    /// Generate lorem ipsum placeholder text
    Lorem(LoremArgs),

    /// Count characters, words, sentences and paragraphs
    Count {
        /// Input file (if not provided, reads from stdin)
        input: Option<PathBuf>,
    },

    /// Convert plain text or simple markdown to HTML
    Html {
        /// Input file (if not provided, reads from stdin)
        input: Option<PathBuf>,

        /// Treat the input as markdown
        #[arg(long)]
        markdown: bool,
    },

    /// Base64-encode or decode text
    Base64 {
        #[command(subcommand)]
        action: Base64Action,
    },
}

#[derive(Args, Debug)]
pub struct RegexArgs {
    /// Pattern to search for
    #[arg(required_unless_present = "example")]
    pub pattern: Option<String>,

    /// Input file (if not provided, reads from stdin)
    pub input: Option<PathBuf>,

    /// Stop after the first match
    #[arg(long)]
    pub no_global: bool,

    /// Case-insensitive matching
    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    /// `^` and `$` match at line boundaries
    #[arg(short = 'm', long)]
    pub multiline: bool,

    /// Print the subject as HTML with matches in <mark>
    #[arg(long)]
    pub html: bool,

    /// Run a built-in example (email, phone, url or date) on its sample text
    #[arg(long, value_name = "NAME", conflicts_with_all = ["pattern", "input"])]
    pub example: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum JsonAction {
    /// Pretty-print
    Format {
        /// Input file (if not provided, reads from stdin)
        input: Option<PathBuf>,

        /// Spaces per nesting level (0 to 10)
        #[arg(long)]
        indent: Option<usize>,

        /// Report key count, depth and sizes on stderr
        #[arg(long)]
        stats: bool,
    },
    /// Remove all insignificant whitespace
    Minify {
        /// Input file (if not provided, reads from stdin)
        input: Option<PathBuf>,

        /// Report key count, depth and sizes on stderr
        #[arg(long)]
        stats: bool,
    },
}

#[derive(Args, Debug)]
pub struct LoremArgs {
    /// words, sentences or paragraphs
    #[arg(long)]
    pub unit: Option<LoremUnit>,

    /// How many units to generate
    #[arg(long)]
    pub count: Option<usize>,

    /// Do not open with "Lorem ipsum dolor sit amet"
    #[arg(long)]
    pub no_lorem_start: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Base64Action {
    /// Encode text as Base64
    Encode {
        /// Input file (if not provided, reads from stdin)
        input: Option<PathBuf>,
    },
    /// Decode Base64 back to text
    Decode {
        /// Input file (if not provided, reads from stdin)
        input: Option<PathBuf>,
    },
}

/// Everything one command produces
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    /// Primary result for stdout, also what `--copy` copies
    pub text: String,
    /// Terminal-styled rendition printed ahead of `text` when stdout is a terminal
    pub preview: Option<String>,
    /// Secondary lines for stderr
    pub notes: Vec<String>,
    /// The `--json` rendition
    pub json: serde_json::Value,
}

impl Output {
    fn plain(text: String, json: serde_json::Value) -> Self {
        Self {
            text,
            preview: None,
            notes: Vec::new(),
            json,
        }
    }
}

/// Run `command` with `config` supplying every default a flag leaves open
pub fn execute(command: &Command, config: &Config) -> Result<Output, TextkitError> {
    match command {
        Command::Regex(args) => run_regex(args, config),
        Command::Json { action } => run_json(action, config),
        Command::Minify { kind, input, stats } => run_minify(*kind, input.as_deref(), *stats),
        Command::Lorem(args) => run_lorem(args, config),
        Command::Count { input } => run_count(input.as_deref()),
        Command::Html { input, markdown } => run_html(input.as_deref(), *markdown),
        Command::Base64 { action } => run_base64(action),
    }
}

fn run_regex(args: &RegexArgs, config: &Config) -> Result<Output, TextkitError> {
    let (source, subject) = match &args.example {
        Some(name) => {
            let example = regex_engine::example(name)
                .ok_or_else(|| TextkitError::UnknownExample(name.clone()))?;
            (example.pattern.to_string(), example.sample.to_string())
        }
        None => (
            args.pattern.clone().unwrap_or_default(),
            InputReader::read_text(args.input.as_deref())?,
        ),
    };

    let mut flags = config.regex.flags();
    if args.no_global {
        flags.global = false;
    }
    flags.case_insensitive |= args.case_insensitive;
    flags.multiline |= args.multiline;

    let spec = PatternSpec::new(source, flags);
    let matches = regex_engine::find_matches(&spec, &subject)?;
    let html = highlight_html(&subject, &matches);

    let text = if args.html {
        html.clone()
    } else {
        let mut lines = Vec::new();
        for m in &matches {
            lines.push(format!("{}: {}", m.index, m.value));
            for (i, group) in m.groups.iter().enumerate() {
                let shown = group.as_deref().unwrap_or("(unmatched)");
                lines.push(format!("  ${}: {}", i + 1, shown));
            }
        }
        lines.join("\n")
    };

    let count = matches.len();
    let json = json!({
        "pattern": spec.source,
        "flags": {
            "global": flags.global,
            "caseInsensitive": flags.case_insensitive,
            "multiline": flags.multiline,
        },
        "count": count,
        "matches": matches,
        "html": html,
    });

    Ok(Output {
        text,
        preview: (!args.html).then(|| highlight_ansi(&subject, &matches)),
        notes: vec![format!(
            "{} {}",
            count,
            if count == 1 { "match" } else { "matches" }
        )],
        json,
    })
}

fn run_json(action: &JsonAction, config: &Config) -> Result<Output, TextkitError> {
    let (input, mode, stats) = match action {
        JsonAction::Format {
            input,
            indent,
            stats,
        } => {
            let indent = indent.unwrap_or_else(|| config.json.effective_indent());
            (input, JsonMode::Format { indent }, *stats)
        }
        JsonAction::Minify { input, stats } => (input, JsonMode::Minify, *stats),
    };

    let text = InputReader::read_text(input.as_deref())?;
    TextkitError::require_content(&text, "paste or pipe some JSON")?;

    let report = json_doc::analyze(&text, mode)?;
    let mut output = Output::plain(
        report.output.clone(),
        json!({ "output": report.output, "stats": report.stats }),
    );
    if stats {
        output.notes.push(format!(
            "keys: {}, depth: {}, size: {} -> {}",
            report.stats.keys,
            report.stats.depth,
            format_bytes(report.stats.original_size),
            format_bytes(report.stats.output_size)
        ));
    }
    Ok(output)
}

fn run_minify(kind: CodeKind, input: Option<&Path>, stats: bool) -> Result<Output, TextkitError> {
    let code = InputReader::read_text(input)?;
    TextkitError::require_content(&code, "paste or pipe some code to minify")?;

    let (minified, delta) = minify_with_stats(&code, kind);
    let mut output = Output::plain(
        minified.clone(),
        json!({ "kind": kind.to_string(), "output": minified, "stats": delta }),
    );
    if stats {
        output.notes.push(format!(
            "{} -> {} ({:.1}% saved)",
            format_bytes(delta.original_size),
            format_bytes(delta.minified_size),
            delta.percentage
        ));
    }
    Ok(output)
}

fn run_lorem(args: &LoremArgs, config: &Config) -> Result<Output, TextkitError> {
    let lorem_config = config
        .lorem
        .to_config_with(args.unit, args.count, args.no_lorem_start)?;

    let text = match args.seed {
        Some(seed) => LoremGenerator::new(StdRng::seed_from_u64(seed)).generate(&lorem_config),
        None => LoremGenerator::new(rand::rng()).generate(&lorem_config),
    };

    let json = json!({
        "unit": lorem_config.unit.to_string(),
        "count": lorem_config.count,
        "text": text,
    });
    Ok(Output::plain(text, json))
}

fn run_count(input: Option<&Path>) -> Result<Output, TextkitError> {
    let text = InputReader::read_text(input)?;
    let stats = words::analyze(&text);

    let summary = [
        format!("Characters: {}", stats.characters),
        format!("Characters (no spaces): {}", stats.characters_no_spaces),
        format!("Words: {}", stats.words),
        format!("Sentences: {}", stats.sentences),
        format!("Paragraphs: {}", stats.paragraphs),
        format!("Lines: {}", stats.lines),
        format!("Reading time: {}", format_reading_time(stats.reading_time_minutes)),
    ]
    .join("\n");

    Ok(Output::plain(summary, json!(stats)))
}

fn run_html(input: Option<&Path>, markdown: bool) -> Result<Output, TextkitError> {
    let text = InputReader::read_text(input)?;
    let format = if markdown {
        HtmlFormat::Markdown
    } else {
        HtmlFormat::Basic
    };

    let html = to_html(&text, format);
    let json = json!({ "format": format.to_string(), "html": html });
    Ok(Output::plain(html, json))
}

fn run_base64(action: &Base64Action) -> Result<Output, TextkitError> {
    let (operation, result) = match action {
        Base64Action::Encode { input } => {
            let text = InputReader::read_text(input.as_deref())?;
            ("encode", base64_codec::encode(&text))
        }
        Base64Action::Decode { input } => {
            let text = InputReader::read_text(input.as_deref())?;
            TextkitError::require_content(&text, "paste or pipe some Base64")?;
            ("decode", base64_codec::decode(&text)?)
        }
    };

    let json = json!({ "operation": operation, "result": result });
    Ok(Output::plain(result, json))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
