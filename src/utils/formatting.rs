//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Pad to a display width; Hijri month names (e.g. "Ramaḍān") are not plain ASCII.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Human friendly "1h 05m" for a number of seconds (used for cache ages).
pub fn secs2readable(secs: i64) -> String {
    let s = secs.max(0);
    let hours = s / 3600;
    let minutes = (s % 3600) / 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, s % 60)
    } else {
        format!("{}s", s)
    }
}
