//! Timings providers: the Aladhan HTTP client and a caching decorator.

pub mod aladhan;
pub mod cached;

pub use aladhan::AladhanClient;
pub use cached::CachedProvider;

use crate::errors::AppResult;
use crate::models::method::{CalculationMethod, School};
use crate::models::settings::UserSettings;
use crate::models::timings::DayData;
use chrono::NaiveDate;

/// Everything a timings request is keyed by, apart from the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingsQuery {
    pub city: String,
    pub country: String,
    pub method: CalculationMethod,
    pub school: School,
}

impl From<&UserSettings> for TimingsQuery {
    fn from(s: &UserSettings) -> Self {
        Self {
            city: s.city.trim().to_string(),
            country: s.country.trim().to_string(),
            method: s.method,
            school: s.school,
        }
    }
}

impl TimingsQuery {
    /// Query-string pairs shared by the daily and monthly endpoints.
    pub fn params(&self) -> [(&'static str, String); 4] {
        [
            ("city", self.city.clone()),
            ("country", self.country.clone()),
            ("method", self.method.code().to_string()),
            ("school", self.school.code().to_string()),
        ]
    }

    pub fn is_complete(&self) -> bool {
        !self.city.is_empty() && !self.country.is_empty()
    }
}

/// Source of prayer timings. Results are whole days or an error, never partial.
pub trait TimingsProvider {
    fn fetch_daily(&self, query: &TimingsQuery, date: NaiveDate) -> AppResult<DayData>;

    fn fetch_monthly(&self, query: &TimingsQuery, year: i32, month: u32)
    -> AppResult<Vec<DayData>>;
}

/// Collapse a provider failure into "no data", logging the cause.
pub fn or_unavailable<T>(result: AppResult<T>, what: &str) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::error!("{what} fetch failed: {e}");
            None
        }
    }
}
