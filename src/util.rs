//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Safely truncate a string to at most `max_bytes` while respecting UTF-8 boundaries.
///
/// If the string is already shorter than `max_bytes`, returns it unchanged.
/// Otherwise, finds the last valid UTF-8 character boundary at or before `max_bytes`
/// and returns a slice up to that point.
pub fn truncate_utf8_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Truncate a preview line to at most `max_bytes`, cut at a UTF-8 boundary,
/// with a trailing ellipsis when anything was dropped.
pub fn clip_line(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }
    let mut clipped = truncate_utf8_safe(s, max_bytes).to_string();
    clipped.push('…');
    clipped
}

/// Fit a label into `max_cols` terminal columns, accounting for wide
/// characters (CJK, emoji). Appends an ellipsis when truncated.
pub fn fit_width(s: &str, max_cols: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_cols {
        return s.to_string();
    }
    let mut out = String::new();
    let mut cols = 0usize;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        // Reserve one column for the ellipsis
        if cols + w > max_cols.saturating_sub(1) {
            break;
        }
        out.push(c);
        cols += w;
    }
    out.push('…');
    out
}

/// Format a byte count with a human-readable suffix (1.2 KB, 3.4 MB, ...).
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
