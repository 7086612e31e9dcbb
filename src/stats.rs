//! Statistics primitives shared by the analyzers
//!
//! Byte sizes, size deltas and display helpers. The JSON analyzer, the code
//! minifier and the word counter all report their numbers through these.

mod sizes;
mod types;

pub use sizes::{byte_size, format_bytes, round_to};
pub use types::SizeDelta;
