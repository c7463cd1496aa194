#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Local, NaiveDate};
use ramadansync::api::TimingsQuery;
use ramadansync::api::cached::{daily_key, monthly_key};
use ramadansync::db::cache::{self, CacheKind};
use ramadansync::db::pool::DbPool;
use ramadansync::models::timings::DayData;
use serde_json::json;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Nothing listens on the discard port, so any real fetch fails fast.
pub const DEAD_API: &str = "http://127.0.0.1:9";

/// Binary under test, isolated from the user's real config directory.
pub fn rs(name: &str) -> Command {
    let home = test_home(name);
    let mut cmd = cargo_bin_cmd!("ramadansync");
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .args(["--api-url", DEAD_API]);
    cmd
}

pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ramadansync_home", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ramadansync.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A provider day shaped like the Aladhan payload.
pub fn sample_day(date: NaiveDate, fajr: &str, maghrib: &str, hijri_day: u32, hijri_month: u32) -> DayData {
    let month_en = if hijri_month == 9 { "Ramaḍān" } else { "Shaʿbān" };
    serde_json::from_value(json!({
        "timings": {
            "Fajr": fajr,
            "Sunrise": "06:31 (PKT)",
            "Dhuhr": "12:23 (PKT)",
            "Asr": "15:46 (PKT)",
            "Sunset": "18:14 (PKT)",
            "Maghrib": maghrib,
            "Isha": "19:32 (PKT)",
            "Imsak": "05:02 (PKT)",
            "Midnight": "00:23 (PKT)",
            "Firstthird": "22:20 (PKT)",
            "Lastthird": "02:26 (PKT)"
        },
        "date": {
            "readable": date.format("%d %b %Y").to_string(),
            "timestamp": "1772510461",
            "gregorian": {
                "date": date.format("%d-%m-%Y").to_string(),
                "format": "DD-MM-YYYY",
                "day": date.format("%d").to_string(),
                "weekday": { "en": date.format("%A").to_string() },
                "month": { "number": date.format("%m").to_string().parse::<u32>().unwrap(), "en": date.format("%B").to_string() },
                "year": date.format("%Y").to_string()
            },
            "hijri": {
                "date": format!("{:02}-{:02}-1447", hijri_day, hijri_month),
                "format": "DD-MM-YYYY",
                "day": format!("{:02}", hijri_day),
                "weekday": { "en": "Al Thalaata", "ar": "الثلاثاء" },
                "month": { "number": hijri_month, "en": month_en, "ar": "رَمَضان" },
                "year": "1447",
                "designation": { "abbreviated": "AH", "expanded": "Anno Hegirae" },
                "holidays": []
            }
        },
        "meta": {
            "latitude": 31.5203696,
            "longitude": 74.3587473,
            "timezone": "Asia/Karachi",
            "method": { "id": 1, "name": "University of Islamic Sciences, Karachi", "params": { "Fajr": 18, "Isha": 18 } },
            "latitudeAdjustmentMethod": "ANGLE_BASED",
            "midnightMode": "STANDARD",
            "school": "STANDARD"
        }
    }))
    .expect("sample day")
}

pub fn lahore_query() -> TimingsQuery {
    TimingsQuery {
        city: "Lahore".into(),
        country: "Pakistan".into(),
        method: Default::default(),
        school: Default::default(),
    }
}

/// Pre-fill the daily cache so the binary never needs the network.
pub fn seed_daily(db_path: &str, query: &TimingsQuery, date: NaiveDate, day: &DayData) {
    let pool = DbPool::open(Path::new(db_path)).expect("open db");
    let payload = serde_json::to_string(day).expect("serialize");
    cache::put(&pool.conn, &daily_key(query, date), CacheKind::Daily, &payload, Local::now())
        .expect("seed daily");
}

pub fn seed_monthly(db_path: &str, query: &TimingsQuery, year: i32, month: u32, days: &[DayData]) {
    let pool = DbPool::open(Path::new(db_path)).expect("open db");
    let payload = serde_json::to_string(days).expect("serialize");
    cache::put(
        &pool.conn,
        &monthly_key(query, year, month),
        CacheKind::Monthly,
        &payload,
        Local::now(),
    )
    .expect("seed monthly");
}

/// A whole month of sample days starting at `first`, Hijri day counting from `hijri_start`.
pub fn sample_month(year: i32, month: u32, ramadan_from: u32) -> Vec<DayData> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let mut i = 1;
    while d.format("%m").to_string().parse::<u32>().unwrap() == month {
        let (hd, hm) = if i >= ramadan_from { (i - ramadan_from + 1, 9) } else { (20 + i, 8) };
        out.push(sample_day(d, "05:12 (PKT)", "18:20 (PKT)", hd, hm));
        d = d.succ_opt().unwrap();
        i += 1;
    }
    out
}
