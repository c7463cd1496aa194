use crate::core::calendar::CalendarRow;
use crate::errors::AppResult;
use std::path::Path;

/// Write calendar rows as CSV with a header line.
pub fn write_csv(path: &Path, rows: &[CalendarRow]) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_path(path)?;

    wtr.write_record(["date", "weekday", "hijri", "sehar", "iftar", "today"])?;

    for r in rows {
        wtr.write_record([
            r.date.as_str(),
            r.weekday.as_str(),
            r.hijri.as_str(),
            r.sehar.as_str(),
            r.iftar.as_str(),
            if r.is_today { "yes" } else { "" },
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
