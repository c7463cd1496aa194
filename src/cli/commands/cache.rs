use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::cache;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::secs2readable;
use crate::utils::table::{Column, Table};
use chrono::Local;

/// Handle the `cache` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cache { info: show, clear } = cmd {
        let pool = super::open_pool(cfg)?;

        if *show {
            let entries = cache::list(&pool.conn)?;
            if entries.is_empty() {
                info("The response cache is empty.");
            } else {
                let now = Local::now();
                let mut table = Table::new(vec![
                    Column::new("Kind", 7),
                    Column::new("Key", 20),
                    Column::new("Age", 8),
                    Column::new("Bytes", 6),
                ]);
                for e in &entries {
                    let age = e
                        .fetched_at
                        .map(|t| secs2readable((now - t).num_seconds()))
                        .unwrap_or_else(|| "?".into());
                    table.add_row(vec![e.kind.clone(), e.key.clone(), age, e.bytes.to_string()]);
                }
                print!("{}", table.fit().render());
            }
        }

        if *clear {
            let removed = cache::clear(&pool.conn)?;
            ttlog_quiet(
                &pool.conn,
                "cache_clear",
                "",
                &format!("{removed} cached responses removed"),
            );
            success(format!("Removed {removed} cached responses."));
        }
    }

    Ok(())
}
