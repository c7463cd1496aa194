use crate::api::{TimingsProvider, TimingsQuery, or_unavailable};
use crate::core::resolver::resolve_next_event;
use crate::errors::AppResult;
use crate::models::next_event::NextEvent;
use crate::models::timings::DayData;
use chrono::{NaiveDate, NaiveDateTime};

/// Holds the current day's timings and derives the next event on each tick.
///
/// Timings are fetched once per calendar date. A failed fetch is not retried
/// for the same date; the last good timings (if any) stay in use.
pub struct Countdown<'p, P: TimingsProvider> {
    provider: &'p P,
    query: TimingsQuery,
    attempted: Option<NaiveDate>,
    day: Option<DayData>,
}

impl<'p, P: TimingsProvider> Countdown<'p, P> {
    pub fn new(provider: &'p P, query: TimingsQuery) -> Self {
        Self {
            provider,
            query,
            attempted: None,
            day: None,
        }
    }

    /// Start from timings already in hand for `date`.
    pub fn with_day(mut self, date: NaiveDate, day: DayData) -> Self {
        self.attempted = Some(date);
        self.day = Some(day);
        self
    }

    pub fn day(&self) -> Option<&DayData> {
        self.day.as_ref()
    }

    /// Recompute for `now`; `None` while no timings are available.
    pub fn tick(&mut self, now: NaiveDateTime) -> AppResult<Option<NextEvent>> {
        let date = now.date();

        if self.attempted != Some(date) {
            self.attempted = Some(date);
            if let Some(fresh) = or_unavailable(
                self.provider.fetch_daily(&self.query, date),
                "daily timings",
            ) {
                log::info!("timings replaced for {date}");
                self.day = Some(fresh);
            }
        }

        match &self.day {
            Some(d) => resolve_next_event(&d.timings, now).map(Some),
            None => Ok(None),
        }
    }
}
