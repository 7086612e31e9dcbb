//! OSC 52 clipboard backend
//!
//! Asks the terminal to set its clipboard, which also works over SSH and
//! inside tmux. The sequence goes to stderr so piped stdout stays clean.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    write_sequence(&mut io::stderr().lock(), text)
}

fn write_sequence<W: Write>(out: &mut W, text: &str) -> ClipboardResult {
    out.write_all(encode_osc52(text).as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    out.flush().map_err(|_| ClipboardError::WriteError)
}

/// Encode text as `\x1b]52;c;{base64}\x07`
///
/// `c` selects the clipboard (as opposed to `p`, the primary selection) and
/// BEL terminates the sequence.
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", crate::base64_codec::encode(text))
}
