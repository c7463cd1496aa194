//! Time utilities: parsing provider "HH:MM (TZ)" strings and formatting them for display.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn zone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(([^)]+)\)").expect("static regex"))
}

fn clock_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d{1,2}):(\d{2})(?:\D|$)").expect("static regex"))
}

/// Clock style used when printing prayer times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    #[default]
    #[serde(rename = "12h")]
    H12,
    #[serde(rename = "24h")]
    H24,
}

/// Parse the leading `H:MM` / `HH:MM` of a provider value. Whatever follows
/// (seconds, a zone annotation with or without a space) is ignored.
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    let caps = clock_regex().captures(value)?;
    let hour = caps[1].parse().ok()?;
    let minute = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Same as [`parse_clock`] but reports which field was malformed.
pub fn require_clock(field: &str, value: &str) -> AppResult<NaiveTime> {
    parse_clock(value).ok_or_else(|| AppError::InvalidTime(format!("{field}: '{value}'")))
}

/// Zone annotation such as `PST` in `"05:12 (PST)"`.
pub fn zone_annotation(value: &str) -> Option<String> {
    zone_regex()
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// `"05:12 (PST)"` → `"5:12 AM"` (12h) or `"05:12"` (24h). Unparseable input renders empty.
pub fn format_clock(value: &str, format: ClockFormat) -> String {
    match parse_clock(value) {
        Some(t) => match format {
            ClockFormat::H12 => t.format("%-I:%M %p").to_string(),
            ClockFormat::H24 => t.format("%H:%M").to_string(),
        },
        None => String::new(),
    }
}
