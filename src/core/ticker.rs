//! Periodic re-evaluation driver for the countdown.

use crate::errors::AppResult;
use chrono::{Local, NaiveDateTime, TimeDelta};
use std::cell::Cell;
use std::time::Duration;

/// Source of the local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Test clock: starts at a fixed instant and moves only when told to.
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, by: TimeDelta) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

/// How the ticker waits between ticks.
pub trait Sleeper {
    fn sleep(&self, d: Duration);
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, d: Duration) {
        std::thread::sleep(d);
    }
}

/// Returned by the tick callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

pub struct Ticker<C: Clock, S: Sleeper> {
    clock: C,
    sleeper: S,
    interval: Duration,
    max_ticks: Option<u64>,
}

impl Ticker<SystemClock, ThreadSleeper> {
    /// One tick per second on the real clock.
    pub fn every_second() -> Self {
        Ticker::new(SystemClock, ThreadSleeper, Duration::from_secs(1))
    }
}

impl<C: Clock, S: Sleeper> Ticker<C, S> {
    pub fn new(clock: C, sleeper: S, interval: Duration) -> Self {
        Self {
            clock,
            sleeper,
            interval,
            max_ticks: None,
        }
    }

    /// Stop after `n` ticks; `0` means unlimited.
    pub fn with_max_ticks(mut self, n: u64) -> Self {
        self.max_ticks = if n == 0 { None } else { Some(n) };
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Call `on_tick` right away and then once per interval.
    /// Returns the number of ticks delivered.
    pub fn run<F>(&self, mut on_tick: F) -> AppResult<u64>
    where
        F: FnMut(NaiveDateTime) -> AppResult<TickControl>,
    {
        let mut ticks = 0;

        loop {
            let control = on_tick(self.clock.now())?;
            ticks += 1;

            if control == TickControl::Stop {
                break;
            }
            if let Some(max) = self.max_ticks
                && ticks >= max
            {
                break;
            }

            self.sleeper.sleep(self.interval);
        }

        Ok(ticks)
    }
}
