use super::{TimingsProvider, TimingsQuery};
use crate::db::cache::{self, CacheKind};
use crate::errors::AppResult;
use crate::models::timings::DayData;
use crate::utils::date::provider_date;
use chrono::{Local, NaiveDate, TimeDelta};
use rusqlite::Connection;
use serde::Serialize;
use serde::de::DeserializeOwned;

fn query_prefix(kind: CacheKind, q: &TimingsQuery) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        kind.as_str(),
        q.city.to_lowercase(),
        q.country.to_lowercase(),
        q.method.code(),
        q.school.code()
    )
}

pub fn daily_key(q: &TimingsQuery, date: NaiveDate) -> String {
    format!("{}|{}", query_prefix(CacheKind::Daily, q), provider_date(&date))
}

pub fn monthly_key(q: &TimingsQuery, year: i32, month: u32) -> String {
    format!("{}|{year}-{month:02}", query_prefix(CacheKind::Monthly, q))
}

/// Configured TTL as a `TimeDelta`; values beyond its range saturate.
fn ttl(secs: u64) -> TimeDelta {
    i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX)
}

/// Serve provider results from `timings_cache` while they are fresh.
pub struct CachedProvider<'a, P: TimingsProvider> {
    inner: P,
    conn: &'a Connection,
    daily_ttl: TimeDelta,
    monthly_ttl: TimeDelta,
}

impl<'a, P: TimingsProvider> CachedProvider<'a, P> {
    pub fn new(inner: P, conn: &'a Connection, daily_ttl_secs: u64, monthly_ttl_secs: u64) -> Self {
        Self {
            inner,
            conn,
            daily_ttl: ttl(daily_ttl_secs),
            monthly_ttl: ttl(monthly_ttl_secs),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    fn lookup<T: DeserializeOwned>(&self, key: &str, ttl: TimeDelta) -> AppResult<Option<T>> {
        let Some(raw) = cache::get_fresh(self.conn, key, ttl, Local::now())? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(v) => {
                log::debug!("cache hit: {key}");
                Ok(Some(v))
            }
            Err(e) => {
                log::warn!("discarding corrupt cache entry {key}: {e}");
                cache::remove(self.conn, key)?;
                Ok(None)
            }
        }
    }

    fn store<T: Serialize>(&self, key: &str, kind: CacheKind, value: &T) {
        let stored = serde_json::to_string(value)
            .map_err(Into::into)
            .and_then(|payload| cache::put(self.conn, key, kind, &payload, Local::now()));

        if let Err(e) = stored {
            log::warn!("could not cache {key}: {e}");
        }
    }
}

impl<P: TimingsProvider> TimingsProvider for CachedProvider<'_, P> {
    fn fetch_daily(&self, query: &TimingsQuery, date: NaiveDate) -> AppResult<DayData> {
        let key = daily_key(query, date);
        if let Some(hit) = self.lookup(&key, self.daily_ttl)? {
            return Ok(hit);
        }

        let fresh = self.inner.fetch_daily(query, date)?;
        self.store(&key, CacheKind::Daily, &fresh);
        Ok(fresh)
    }

    fn fetch_monthly(
        &self,
        query: &TimingsQuery,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<DayData>> {
        let key = monthly_key(query, year, month);
        if let Some(hit) = self.lookup(&key, self.monthly_ttl)? {
            return Ok(hit);
        }

        let fresh = self.inner.fetch_monthly(query, year, month)?;
        self.store(&key, CacheKind::Monthly, &fresh);
        Ok(fresh)
    }
}
