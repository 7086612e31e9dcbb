use thiserror::Error;

use crate::base64_codec::Base64Error;
use crate::json::ParseError;
use crate::lorem::LoremError;
use crate::regex_engine::PatternError;

#[derive(Debug, Error)]
pub enum TextkitError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[from] ParseError),

    #[error("{0}")]
    Lorem(#[from] LoremError),

    #[error("Base64 error: {0}")]
    Base64(#[from] Base64Error),

    #[error("Unknown example '{0}' (expected email, phone, url or date)")]
    UnknownExample(String),

    #[error("No input: {0}")]
    EmptyInput(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TextkitError {
    /// Guard used by callers before running a computation on user text.
    pub fn require_content<'a>(text: &'a str, what: &'static str) -> Result<&'a str, Self> {
        if text.trim().is_empty() {
            Err(TextkitError::EmptyInput(what))
        } else {
            Ok(text)
        }
    }
}
