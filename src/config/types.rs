// Configuration type definitions

use serde::Deserialize;

use crate::json::{DEFAULT_INDENT, MAX_INDENT};
use crate::lorem::{LoremConfig, LoremError, LoremUnit};
use crate::regex_engine::RegexFlags;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// JSON formatter configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl JsonConfig {
    /// Indent clamped to what the writer supports
    pub fn effective_indent(&self) -> usize {
        self.indent.min(MAX_INDENT)
    }
}

impl Default for JsonConfig {
    fn default() -> Self {
        JsonConfig {
            indent: DEFAULT_INDENT,
        }
    }
}

/// Lorem generator defaults
#[derive(Debug, Clone, Deserialize)]
pub struct LoremDefaults {
    #[serde(default)]
    pub unit: LoremUnit,
    #[serde(default = "default_lorem_count")]
    pub count: usize,
    #[serde(default = "default_true")]
    pub start_with_lorem: bool,
}

fn default_lorem_count() -> usize {
    3
}

fn default_true() -> bool {
    true
}

impl LoremDefaults {
    /// Validated generator settings, command-line values taking precedence
    pub fn to_config_with(
        &self,
        unit: Option<LoremUnit>,
        count: Option<usize>,
        no_lorem_start: bool,
    ) -> Result<LoremConfig, LoremError> {
        LoremConfig::new(
            unit.unwrap_or(self.unit),
            count.unwrap_or(self.count),
            self.start_with_lorem && !no_lorem_start,
        )
    }
}

impl Default for LoremDefaults {
    fn default() -> Self {
        LoremDefaults {
            unit: LoremUnit::default(),
            count: default_lorem_count(),
            start_with_lorem: true,
        }
    }
}

/// Default regex flags
#[derive(Debug, Clone, Deserialize)]
pub struct RegexConfig {
    #[serde(default = "default_true")]
    pub global: bool,
    #[serde(default)]
    pub case_insensitive: bool,
    #[serde(default)]
    pub multiline: bool,
}

impl RegexConfig {
    pub fn flags(&self) -> RegexFlags {
        RegexFlags {
            global: self.global,
            case_insensitive: self.case_insensitive,
            multiline: self.multiline,
        }
    }
}

impl Default for RegexConfig {
    fn default() -> Self {
        RegexConfig {
            global: true,
            case_insensitive: false,
            multiline: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub json: JsonConfig,
    #[serde(default)]
    pub lorem: LoremDefaults,
    #[serde(default)]
    pub regex: RegexConfig,
}
