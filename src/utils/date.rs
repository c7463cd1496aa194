use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Provider dates are `DD-MM-YYYY`.
pub fn provider_date(d: &NaiveDate) -> String {
    d.format("%d-%m-%Y").to_string()
}

pub fn parse_provider_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d-%m-%Y").ok()
}

/// Resolve an optional year/month pair against today's date.
pub fn resolve_year_month(year: Option<i32>, month: Option<u32>) -> Result<(i32, u32), String> {
    let now = today();
    let y = year.unwrap_or_else(|| now.year());
    let m = month.unwrap_or_else(|| now.month());

    if NaiveDate::from_ymd_opt(y, m, 1).is_none() {
        return Err(format!("Invalid month: {y}-{m:02}"));
    }

    Ok((y, m))
}
