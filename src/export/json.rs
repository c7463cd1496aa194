use crate::core::calendar::CalendarRow;
use crate::errors::AppResult;
use std::path::Path;

/// Write calendar rows as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[CalendarRow]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
