//! Lorem ipsum placeholder text
//!
//! Words are drawn uniformly from a fixed dictionary by a caller-supplied
//! random number generator; nothing here is global or cryptographically strong.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

/// Dictionary every generated word comes from
pub const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
    "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore",
    "magna", "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud",
    "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo",
    "consequat", "duis", "aute", "irure", "in", "reprehenderit", "voluptate",
    "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia",
    "deserunt", "mollit", "anim", "id", "est", "laborum", "at", "vero", "eos",
    "accusamus", "iusto", "odio", "dignissimos", "ducimus", "blanditiis",
    "praesentium", "voluptatum", "deleniti", "atque", "corrupti", "quos", "dolores",
    "quas", "molestias", "excepturi", "obcaecati", "cupiditate", "provident",
];

/// Fixed opening used for sentences and paragraphs
pub const PREAMBLE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";

pub const SENTENCE_WORDS: std::ops::RangeInclusive<usize> = 8..=15;
pub const PARAGRAPH_SENTENCES: std::ops::RangeInclusive<usize> = 4..=8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoremError {
    #[error("Count must be between 1 and {max} for {unit}, got {count}")]
    CountOutOfRange {
        unit: LoremUnit,
        count: usize,
        max: usize,
    },
}

/// Granularity of the generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoremUnit {
    Words,
    Sentences,
    #[default]
    Paragraphs,
}

impl LoremUnit {
    pub fn max_count(self) -> usize {
        match self {
            LoremUnit::Words => 500,
            LoremUnit::Sentences => 50,
            LoremUnit::Paragraphs => 20,
        }
    }
}

impl fmt::Display for LoremUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoremUnit::Words => write!(f, "words"),
            LoremUnit::Sentences => write!(f, "sentences"),
            LoremUnit::Paragraphs => write!(f, "paragraphs"),
        }
    }
}

impl FromStr for LoremUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "words" | "word" => Ok(LoremUnit::Words),
            "sentences" | "sentence" => Ok(LoremUnit::Sentences),
            "paragraphs" | "paragraph" => Ok(LoremUnit::Paragraphs),
            other => Err(format!("unknown unit '{}'", other)),
        }
    }
}

/// What to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoremConfig {
    pub unit: LoremUnit,
    pub count: usize,
    pub start_with_lorem: bool,
}

impl LoremConfig {
    /// Validated config, `count` must lie in `1..=unit.max_count()`
    pub fn new(unit: LoremUnit, count: usize, start_with_lorem: bool) -> Result<Self, LoremError> {
        let max = unit.max_count();
        if count == 0 || count > max {
            return Err(LoremError::CountOutOfRange { unit, count, max });
        }
        Ok(Self {
            unit,
            count,
            start_with_lorem,
        })
    }
}

/// Generator over a caller-owned RNG
pub struct LoremGenerator<R> {
    rng: R,
}

impl<R: Rng> LoremGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn word(&mut self) -> &'static str {
        LOREM_WORDS[self.rng.random_range(0..LOREM_WORDS.len())]
    }

    /// 8 to 15 words, first letter capitalized, ending in a period
    pub fn sentence(&mut self) -> String {
        let len = self.rng.random_range(SENTENCE_WORDS);
        let words: Vec<&str> = (0..len).map(|_| self.word()).collect();

        let mut sentence = capitalize(&words.join(" "));
        sentence.push('.');
        sentence
    }

    /// 4 to 8 sentences separated by single spaces
    pub fn paragraph(&mut self) -> String {
        let len = self.rng.random_range(PARAGRAPH_SENTENCES);
        let sentences: Vec<String> = (0..len).map(|_| self.sentence()).collect();
        sentences.join(" ")
    }

    pub fn generate(&mut self, config: &LoremConfig) -> String {
        let text = match config.unit {
            LoremUnit::Words => {
                let words: Vec<&str> = (0..config.count).map(|_| self.word()).collect();
                words.join(" ")
            }
            LoremUnit::Sentences => {
                let sentences: Vec<String> = (0..config.count).map(|_| self.sentence()).collect();
                sentences.join(" ")
            }
            LoremUnit::Paragraphs => {
                let paragraphs: Vec<String> =
                    (0..config.count).map(|_| self.paragraph()).collect();
                paragraphs.join("\n\n")
            }
        };

        if !config.start_with_lorem || text.is_empty() {
            return text;
        }

        match config.unit {
            LoremUnit::Words => self.preamble_words(config.count),
            LoremUnit::Sentences | LoremUnit::Paragraphs => {
                let rest = match text.find(' ') {
                    Some(i) => &text[i + 1..],
                    None => text.as_str(),
                };
                format!("{}{}", PREAMBLE, rest)
            }
        }
    }

    /// Exactly `count` words, opening with the preamble's words
    fn preamble_words(&mut self, count: usize) -> String {
        let mut words = preamble_word_list();
        words.truncate(count);
        while words.len() < count {
            words.push(self.word().to_string());
        }
        words.join(" ")
    }
}

/// The preamble lowercased, without punctuation, split into words
pub fn preamble_word_list() -> Vec<String> {
    PREAMBLE
        .trim()
        .replace([',', '.'], "")
        .to_lowercase()
        .split(' ')
        .map(str::to_string)
        .collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "lorem_tests.rs"]
mod lorem_tests;
