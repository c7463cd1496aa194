use super::{TimingsProvider, TimingsQuery};
use crate::errors::{AppError, AppResult};
use crate::models::timings::DayData;
use crate::utils::date::provider_date;
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("ramadansync/", env!("CARGO_PKG_VERSION"));

/// `{ code, status, data }` wrapper used by every Aladhan endpoint.
#[derive(Debug, Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    status: String,
    data: serde_json::Value,
}

/// Blocking client for `timingsByCity` and `calendarByCity`.
pub struct AladhanClient {
    http: Client,
    base_url: String,
}

impl AladhanClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &TimingsQuery) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("GET {url} ({}, {})", query.city, query.country);

        let response = self.http.get(&url).query(&query.params()).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(AppError::Api(format!("{url} returned HTTP {status}")));
        }

        let envelope: Envelope = serde_json::from_str(&body)?;
        if envelope.code != 200 {
            let detail = envelope.data.as_str().unwrap_or_default().to_string();
            return Err(AppError::Api(format!(
                "{} {}: {}",
                envelope.code, envelope.status, detail
            )));
        }

        Ok(serde_json::from_value(envelope.data)?)
    }
}

impl TimingsProvider for AladhanClient {
    fn fetch_daily(&self, query: &TimingsQuery, date: NaiveDate) -> AppResult<DayData> {
        self.get(&format!("timingsByCity/{}", provider_date(&date)), query)
    }

    fn fetch_monthly(
        &self,
        query: &TimingsQuery,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<DayData>> {
        self.get(&format!("calendarByCity/{year}/{month}"), query)
    }
}
