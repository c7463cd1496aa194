use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventName {
    Sehar,
    Iftar,
    SeharNextDay,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::Sehar => "Sehar",
            EventName::Iftar => "Iftar",
            EventName::SeharNextDay => "Sehar (Next Day)",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The upcoming Sehar/Iftar boundary and the time left until it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextEvent {
    pub name: EventName,
    pub target: NaiveDateTime,
    pub remaining: TimeDelta,
}

impl NextEvent {
    /// Whole seconds left, never negative.
    pub fn remaining_seconds(&self) -> i64 {
        self.remaining.num_seconds().max(0)
    }

    /// `HH:MM:SS`, each field floor-truncated and zero padded.
    pub fn remaining_hms(&self) -> String {
        let total = self.remaining_seconds();
        format!(
            "{:02}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}
