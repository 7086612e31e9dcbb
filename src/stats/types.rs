//! Type definitions for size statistics

use std::fmt;

use serde::Serialize;

use super::sizes::{byte_size, format_bytes, round_to};

/// Size change between an input text and its transformed output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeDelta {
    pub original_size: usize,
    pub minified_size: usize,
    /// Negative when the output grew
    pub savings: i64,
    /// Savings as a percentage of the original, one decimal place
    pub percentage: f64,
}

impl SizeDelta {
    pub fn between(original: &str, result: &str) -> Self {
        Self::from_sizes(byte_size(original), byte_size(result))
    }

    pub fn from_sizes(original_size: usize, minified_size: usize) -> Self {
        let savings = original_size as i64 - minified_size as i64;
        let percentage = if original_size == 0 {
            0.0
        } else {
            round_to(savings as f64 / original_size as f64 * 100.0, 1)
        };

        Self {
            original_size,
            minified_size,
            savings,
            percentage,
        }
    }
}

impl fmt::Display for SizeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({:.1}% saved)",
            format_bytes(self.original_size),
            format_bytes(self.minified_size),
            self.percentage
        )
    }
}
