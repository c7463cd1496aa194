use crate::models::timings::DayData;
use crate::utils::date::parse_provider_date;
use crate::utils::time::{ClockFormat, format_clock};
use chrono::NaiveDate;
use serde::Serialize;

/// One line of the monthly Sehar/Iftar table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarRow {
    pub date: String,
    pub weekday: String,
    pub hijri: String,
    pub sehar: String,
    pub iftar: String,
    pub is_today: bool,
    #[serde(skip)]
    pub is_ramadan: bool,
}

pub struct CalendarLogic;

impl CalendarLogic {
    /// Build the table rows. `today` marks the matching Gregorian day.
    pub fn build_rows(days: &[DayData], today: NaiveDate, clock: ClockFormat) -> Vec<CalendarRow> {
        days.iter()
            .map(|d| {
                let greg = parse_provider_date(&d.date.gregorian.date);
                CalendarRow {
                    date: greg
                        .map(|g| g.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| d.date.readable.clone()),
                    weekday: d.date.gregorian.weekday.en.clone(),
                    hijri: d.date.hijri.short_label(),
                    sehar: format_clock(&d.timings.fajr, clock),
                    iftar: format_clock(&d.timings.maghrib, clock),
                    is_today: greg == Some(today),
                    is_ramadan: d.date.hijri.is_ramadan(),
                }
            })
            .collect()
    }

    /// Keep only the days of Ramadan (Hijri month 9).
    pub fn ramadan_only(rows: Vec<CalendarRow>) -> Vec<CalendarRow> {
        rows.into_iter().filter(|r| r.is_ramadan).collect()
    }
}
