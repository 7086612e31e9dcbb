//! textkit library - text analysis and transformation
//!
//! Regex match extraction and highlighting, JSON formatting with structural
//! statistics, regex-pipeline code minification, lorem ipsum generation, word
//! statistics, text-to-HTML conversion and Base64. Every operation is a pure
//! function of its input; the binary adds file/stdin input, configuration and
//! clipboard support on top.

pub mod base64_codec;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod html;
pub mod input;
pub mod json;
pub mod lorem;
pub mod minify;
pub mod regex_engine;
pub mod stats;
pub mod words;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::TextkitError;
