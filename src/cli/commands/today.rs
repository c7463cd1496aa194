use crate::api::{TimingsProvider, TimingsQuery, or_unavailable};
use crate::config::Config;
use crate::core::dashboard::{DashboardLogic, UNAVAILABLE_TODAY};
use crate::core::resolver::resolve_next_event;
use crate::core::settings::validate;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning};
use chrono::Local;

/// Handle the `today` command: one snapshot of the dashboard.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = super::open_pool(cfg)?;
    let store = super::open_settings(&pool)?;
    super::first_run_hint(&store);

    let settings = validate(store.get()).map_err(AppError::InvalidSettings)?;
    let query = TimingsQuery::from(&settings);
    let provider = super::build_provider(cfg, &pool)?;

    let now = Local::now().naive_local();
    let Some(day) = or_unavailable(provider.fetch_daily(&query, now.date()), "daily timings")
    else {
        warning(UNAVAILABLE_TODAY);
        return Ok(());
    };

    header(format!("RamadanSync · {}", settings.location_label()));

    let next = resolve_next_event(&day.timings, now)?;
    println!("{}", DashboardLogic::countdown_line(&next));
    println!("{}\n", DashboardLogic::date_line(&day));

    println!("🕰️  Today's Timings\n");
    print!("{}", DashboardLogic::timings_table(&day, cfg.clock_format));

    Ok(())
}
