use crate::api::TimingsQuery;
use crate::config::Config;
use crate::core::countdown::Countdown;
use crate::core::dashboard::{DashboardLogic, UNAVAILABLE_TODAY};
use crate::core::settings::validate;
use crate::core::ticker::{TickControl, Ticker};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning};
use std::io::{self, Write};

/// Handle the `countdown` command: redraw the remaining time every second.
pub fn handle(ticks: u64, cfg: &Config) -> AppResult<()> {
    let pool = super::open_pool(cfg)?;
    let store = super::open_settings(&pool)?;
    super::first_run_hint(&store);

    let settings = validate(store.get()).map_err(AppError::InvalidSettings)?;
    let provider = super::build_provider(cfg, &pool)?;
    let mut countdown = Countdown::new(&provider, TimingsQuery::from(&settings));

    header(format!("RamadanSync · {}", settings.location_label()));

    let mut stdout = io::stdout();
    let mut drawn = false;

    Ticker::every_second()
        .with_max_ticks(ticks)
        .run(|now| match countdown.tick(now)? {
            Some(ev) => {
                // \x1b[2K clears the previous line before redrawing it
                write!(stdout, "\r\x1b[2K{}", DashboardLogic::countdown_line(&ev))?;
                stdout.flush()?;
                drawn = true;
                Ok(TickControl::Continue)
            }
            None => {
                warning(UNAVAILABLE_TODAY);
                Ok(TickControl::Stop)
            }
        })?;

    if drawn {
        println!();
    }
    Ok(())
}
