use crate::models::next_event::NextEvent;
use crate::models::timings::DayData;
use crate::utils::colors::{colorize_iftar, colorize_optional, colorize_sehar, RESET};
use crate::utils::formatting::{bold, italic};
use crate::utils::table::{Column, Table};
use crate::utils::time::{ClockFormat, format_clock, zone_annotation};

pub const UNAVAILABLE_TODAY: &str = "Today's timings are currently unavailable for this location.";
pub const UNAVAILABLE_CALENDAR: &str = "Could not load monthly calendar for this location.";
pub const MISSING_LOCATION: &str =
    "City and country are required to load the monthly calendar.";

pub struct DashboardLogic;

impl DashboardLogic {
    /// "Time remaining until Iftar: 08:45:00"
    pub fn countdown_line(ev: &NextEvent) -> String {
        format!(
            "⏳ Time remaining until {}: {}",
            ev.name,
            bold(&ev.remaining_hms())
        )
    }

    /// "Islamic Date: 14-09-1447 / 03 Mar 2026"
    pub fn date_line(day: &DayData) -> String {
        italic(&format!(
            "Islamic Date: {} / {}",
            day.date.hijri.date, day.date.readable
        ))
    }

    /// Today's timings table; Sehar and Iftar rows are highlighted.
    pub fn timings_table(day: &DayData, clock: ClockFormat) -> String {
        let mut table = Table::new(vec![Column::new("Prayer", 16), Column::new("Time", 9)]);

        for (label, raw) in day.timings.display_rows() {
            let shown = format_clock(raw, clock);
            let cell = match label {
                "Sehar (Fajr)" => colorize_sehar(&shown),
                "Iftar (Maghrib)" => colorize_iftar(&shown),
                _ => colorize_optional(&shown, RESET),
            };
            table.add_row(vec![label.to_string(), cell]);
        }

        let mut out = table.fit().render();
        if let Some(zone) = zone_annotation(day.timings.fajr.as_str()).or_else(|| {
            (!day.meta.timezone.is_empty()).then(|| day.meta.timezone.clone())
        }) {
            out.push_str(&format!("Timezone: {zone}\n"));
        }
        out
    }
}
