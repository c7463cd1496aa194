/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Sehar rows/values are purple, Iftar indigo-ish (cyan in a terminal).
pub fn colorize_sehar(value: &str) -> String {
    colorize_optional(value, MAGENTA)
}

pub fn colorize_iftar(value: &str) -> String {
    colorize_optional(value, CYAN)
}

/// Grey for empty values, `color` otherwise.
pub fn colorize_optional(value: &str, color: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--:--{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}

pub fn highlight_today(value: &str) -> String {
    format!("{GREEN}{value}{RESET}")
}
