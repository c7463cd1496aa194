//! Sehar / Iftar resolution for a single day of timings.

use crate::errors::AppResult;
use crate::models::next_event::{EventName, NextEvent};
use crate::models::timings::DailyTimings;
use crate::utils::time::require_clock;
use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

fn anchor(now: NaiveDateTime, t: NaiveTime) -> NaiveDateTime {
    // parse_clock only yields whole minutes, so seconds are already zero
    now.date().and_time(t)
}

/// Pick the next event for `now` using today's Fajr and Maghrib.
///
/// - before Fajr → Sehar (today's Fajr)
/// - before Maghrib → Iftar (today's Maghrib)
/// - otherwise → Sehar (Next Day), approximated as today's Fajr + 24h
///
/// Fails with `InvalidTime` when Fajr or Maghrib has no `HH:MM` prefix.
pub fn resolve_next_event(timings: &DailyTimings, now: NaiveDateTime) -> AppResult<NextEvent> {
    let sehar = anchor(now, require_clock("Fajr", timings.sehar())?);
    let iftar = anchor(now, require_clock("Maghrib", timings.iftar())?);

    let (name, target) = if now < sehar {
        (EventName::Sehar, sehar)
    } else if now < iftar {
        (EventName::Iftar, iftar)
    } else {
        // Tomorrow's Fajr is not fetched; it can differ from today's by a minute or two.
        (EventName::SeharNextDay, sehar + TimeDelta::hours(24))
    };

    let remaining = (target - now).max(TimeDelta::zero());

    Ok(NextEvent {
        name,
        target,
        remaining,
    })
}
