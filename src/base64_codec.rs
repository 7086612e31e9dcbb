//! Base64 text encoding with the standard padded alphabet

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Error {
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

pub fn encode(text: &str) -> String {
    STANDARD.encode(text)
}

/// Decode to text; ASCII whitespace such as line wrapping is ignored
pub fn decode(text: &str) -> Result<String, Base64Error> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| Base64Error::InvalidBase64(e.to_string()))?;

    String::from_utf8(bytes).map_err(|_| Base64Error::InvalidUtf8)
}
