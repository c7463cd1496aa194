use crate::api::{TimingsProvider, TimingsQuery, or_unavailable};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarLogic, CalendarRow};
use crate::core::dashboard::{MISSING_LOCATION, UNAVAILABLE_CALENDAR};
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{colorize_iftar, colorize_sehar, highlight_today};
use crate::utils::date::{resolve_year_month, today};
use crate::utils::table::{Column, Table};

fn render(rows: &[CalendarRow]) -> String {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Day", 9),
        Column::new("Hijri", 14),
        Column::new("Sehar", 8),
        Column::new("Iftar", 8),
    ]);

    for r in rows {
        let date = if r.is_today {
            highlight_today(&format!("{} ◀", r.date))
        } else {
            r.date.clone()
        };
        table.add_row(vec![
            date,
            r.weekday.clone(),
            r.hijri.clone(),
            colorize_sehar(&r.sehar),
            colorize_iftar(&r.iftar),
        ]);
    }

    table.fit().render()
}

/// Handle the `calendar` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        year,
        month,
        ramadan,
        export,
        file,
        force,
    } = cmd
    {
        let (y, m) = resolve_year_month(*year, *month).map_err(AppError::InvalidDate)?;

        let pool = super::open_pool(cfg)?;
        let store = super::open_settings(&pool)?;
        super::first_run_hint(&store);

        let query = TimingsQuery::from(store.get());
        if !query.is_complete() {
            warning(MISSING_LOCATION);
            return Ok(());
        }

        let provider = super::build_provider(cfg, &pool)?;
        let Some(days) = or_unavailable(provider.fetch_monthly(&query, y, m), "monthly calendar")
        else {
            warning(UNAVAILABLE_CALENDAR);
            return Ok(());
        };

        let mut rows = CalendarLogic::build_rows(&days, today(), cfg.clock_format);
        if *ramadan {
            rows = CalendarLogic::ramadan_only(rows);
        }

        // ---- EXPORT ----
        if let (Some(format), Some(path)) = (export, file) {
            if let Some(out) = ExportLogic::export_calendar(&rows, *format, path, *force)? {
                ttlog_quiet(
                    &pool.conn,
                    "export",
                    format.as_str(),
                    &format!("{} rows for {y}-{m:02} → {}", rows.len(), out.display()),
                );
            }
            return Ok(());
        }

        // ---- PRINT ----
        header(format!(
            "Calendar {y}-{m:02} · {}, {}",
            query.city, query.country
        ));

        if rows.is_empty() {
            warning("No days to show for this month.");
            return Ok(());
        }

        print!("{}", render(&rows));
    }

    Ok(())
}
