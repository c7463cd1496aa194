//! Response cache for provider payloads (`timings_cache` table).

use crate::errors::AppResult;
use chrono::{DateTime, Local, TimeDelta};
use rusqlite::{Connection, OptionalExtension, params};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKind {
    Daily,
    Monthly,
}

impl CacheKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKind::Daily => "daily",
            CacheKind::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheEntryInfo {
    pub key: String,
    pub kind: String,
    pub fetched_at: Option<DateTime<Local>>,
    pub bytes: usize,
}

fn parse_ts(raw: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}

/// Payload stored under `key` if it is younger than `max_age` at `now`.
/// Unreadable timestamps count as stale.
pub fn get_fresh(
    conn: &Connection,
    key: &str,
    max_age: TimeDelta,
    now: DateTime<Local>,
) -> AppResult<Option<String>> {
    let row: Option<(String, String)> = conn
        .query_row(
            "SELECT payload, fetched_at FROM timings_cache WHERE key = ?1",
            [key],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let Some((payload, fetched_at)) = row else {
        return Ok(None);
    };

    match parse_ts(&fetched_at) {
        Some(ts) if now - ts <= max_age && ts <= now => Ok(Some(payload)),
        _ => Ok(None),
    }
}

pub fn put(
    conn: &Connection,
    key: &str,
    kind: CacheKind,
    payload: &str,
    fetched_at: DateTime<Local>,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO timings_cache (key, kind, payload, fetched_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(key) DO UPDATE SET
            kind = excluded.kind,
            payload = excluded.payload,
            fetched_at = excluded.fetched_at",
        params![key, kind.as_str(), payload, fetched_at.to_rfc3339()],
    )?;
    Ok(())
}

pub fn remove(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM timings_cache WHERE key = ?1", [key])?;
    Ok(())
}

/// Drop every cached payload; returns how many were removed.
pub fn clear(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM timings_cache", [])?)
}

pub fn list(conn: &Connection) -> AppResult<Vec<CacheEntryInfo>> {
    let mut stmt = conn.prepare(
        "SELECT key, kind, fetched_at, length(payload) FROM timings_cache ORDER BY fetched_at DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        let raw: String = row.get(2)?;
        let bytes: i64 = row.get(3)?;
        Ok(CacheEntryInfo {
            key: row.get(0)?,
            kind: row.get(1)?,
            fetched_at: parse_ts(&raw),
            bytes: bytes.max(0) as usize,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
