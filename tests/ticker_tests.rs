use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use ramadansync::api::{TimingsProvider, TimingsQuery};
use ramadansync::core::countdown::Countdown;
use ramadansync::core::ticker::{Clock, FixedClock, Sleeper, TickControl, Ticker};
use ramadansync::errors::{AppError, AppResult};
use ramadansync::models::next_event::EventName;
use ramadansync::models::timings::DayData;
use std::cell::{Cell, RefCell};
use std::time::Duration;

mod common;
use common::{lahore_query, sample_day};

/// Sleeping moves the fixed clock forward instead of blocking.
struct Advance<'a>(&'a FixedClock);

impl Sleeper for Advance<'_> {
    fn sleep(&self, d: Duration) {
        self.0.advance(TimeDelta::from_std(d).unwrap());
    }
}

fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// Returns a different Fajr per date and records requested dates.
struct PerDay {
    requested: RefCell<Vec<NaiveDate>>,
    fail_on: Option<NaiveDate>,
}

impl TimingsProvider for PerDay {
    fn fetch_daily(&self, _q: &TimingsQuery, date: NaiveDate) -> AppResult<DayData> {
        self.requested.borrow_mut().push(date);
        if Some(date) == self.fail_on {
            return Err(AppError::Api("timeout".into()));
        }
        let fajr = if date.format("%d").to_string() == "03" { "05:12" } else { "05:10" };
        Ok(sample_day(date, fajr, "18:20", 14, 9))
    }

    fn fetch_monthly(&self, _q: &TimingsQuery, _y: i32, _m: u32) -> AppResult<Vec<DayData>> {
        unreachable!("countdown only asks for single days")
    }
}

#[test]
fn stops_after_the_tick_limit() {
    let clock = FixedClock::new(at(3, 10, 0, 0));
    let ticker = Ticker::new(&clock, Advance(&clock), Duration::from_secs(1)).with_max_ticks(5);

    let mut seen = Vec::new();
    let ticks = ticker
        .run(|now| {
            seen.push(now);
            Ok(TickControl::Continue)
        })
        .unwrap();

    assert_eq!(ticks, 5);
    assert_eq!(seen.first(), Some(&at(3, 10, 0, 0)));
    assert_eq!(seen.last(), Some(&at(3, 10, 0, 4)));
}

#[test]
fn callback_can_stop_the_loop() {
    let clock = FixedClock::new(at(3, 10, 0, 0));
    let ticker = Ticker::new(&clock, Advance(&clock), Duration::from_secs(1));

    let count = Cell::new(0);
    let ticks = ticker
        .run(|_| {
            count.set(count.get() + 1);
            Ok(if count.get() == 3 {
                TickControl::Stop
            } else {
                TickControl::Continue
            })
        })
        .unwrap();

    assert_eq!(ticks, 3);
    assert_eq!(ticker.clock().now(), at(3, 10, 0, 2));
}

#[test]
fn callback_errors_propagate() {
    let clock = FixedClock::new(at(3, 10, 0, 0));
    let ticker = Ticker::new(&clock, Advance(&clock), Duration::from_secs(1));
    let res = ticker.run(|_| Err(AppError::Other("boom".into())));
    assert!(res.is_err());
}

#[test]
fn countdown_decreases_each_second() {
    let provider = PerDay {
        requested: RefCell::new(Vec::new()),
        fail_on: None,
    };
    let mut cd = Countdown::new(&provider, lahore_query());

    let a = cd.tick(at(3, 18, 19, 58)).unwrap().unwrap();
    let b = cd.tick(at(3, 18, 19, 59)).unwrap().unwrap();
    let c = cd.tick(at(3, 18, 20, 0)).unwrap().unwrap();

    assert_eq!(a.remaining_hms(), "00:00:02");
    assert_eq!(b.remaining_hms(), "00:00:01");
    assert_eq!(c.name, EventName::SeharNextDay);
    // one fetch for one calendar date
    assert_eq!(provider.requested.borrow().len(), 1);
}

#[test]
fn countdown_refetches_when_the_date_changes() {
    let provider = PerDay {
        requested: RefCell::new(Vec::new()),
        fail_on: None,
    };
    let mut cd = Countdown::new(&provider, lahore_query());

    let evening = cd.tick(at(3, 23, 59, 59)).unwrap().unwrap();
    assert_eq!(evening.name, EventName::SeharNextDay);
    assert_eq!(evening.target, at(4, 5, 12, 0));

    let after_midnight = cd.tick(at(4, 0, 0, 0)).unwrap().unwrap();
    assert_eq!(after_midnight.name, EventName::Sehar);
    assert_eq!(after_midnight.target, at(4, 5, 10, 0));

    assert_eq!(
        *provider.requested.borrow(),
        vec![
            NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
        ]
    );
}

#[test]
fn failed_fetch_keeps_previous_timings_without_retrying() {
    let provider = PerDay {
        requested: RefCell::new(Vec::new()),
        fail_on: NaiveDate::from_ymd_opt(2026, 3, 4),
    };
    let mut cd = Countdown::new(&provider, lahore_query());

    cd.tick(at(3, 22, 0, 0)).unwrap().unwrap();
    let kept = cd.tick(at(4, 1, 0, 0)).unwrap().unwrap();
    cd.tick(at(4, 1, 0, 1)).unwrap().unwrap();

    // yesterday's 05:12 anchored on the new date
    assert_eq!(kept.target, at(4, 5, 12, 0));
    assert_eq!(provider.requested.borrow().len(), 2);
}

#[test]
fn countdown_without_any_timings_yields_nothing() {
    let provider = PerDay {
        requested: RefCell::new(Vec::new()),
        fail_on: NaiveDate::from_ymd_opt(2026, 3, 3),
    };
    let mut cd = Countdown::new(&provider, lahore_query());
    assert!(cd.tick(at(3, 9, 0, 0)).unwrap().is_none());
    assert!(cd.day().is_none());
}

#[test]
fn seeded_countdown_does_not_fetch() {
    let provider = PerDay {
        requested: RefCell::new(Vec::new()),
        fail_on: None,
    };
    let date = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
    let mut cd = Countdown::new(&provider, lahore_query())
        .with_day(date, sample_day(date, "05:12", "18:20", 14, 9));

    let ev = cd.tick(at(3, 12, 0, 0)).unwrap().unwrap();
    assert_eq!(ev.name, EventName::Iftar);
    assert!(provider.requested.borrow().is_empty());
}
