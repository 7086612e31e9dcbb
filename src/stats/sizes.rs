//! Counting and rounding helpers

/// Size of `text` in bytes of its UTF-8 encoding
pub fn byte_size(text: &str) -> usize {
    text.len()
}

/// Round `value` to `places` decimal places, halves away from zero
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Human-readable byte count
///
/// Below 1 KiB the exact count is shown, otherwise kilobytes with two decimals:
/// - `512` -> `"512 B"`
/// - `2048` -> `"2.00 KB"`
pub fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    }
}
