//! Subcommand handlers plus the wiring they share.

pub mod cache;
pub mod calendar;
pub mod config;
pub mod countdown;
pub mod init;
pub mod log;
pub mod methods;
pub mod settings;
pub mod today;

use crate::api::{AladhanClient, CachedProvider};
use crate::config::Config;
use crate::core::settings::SettingsStore;
use crate::db::kv::SqliteStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open(&cfg.database_path())
}

pub(crate) fn open_settings(pool: &DbPool) -> AppResult<SettingsStore<SqliteStore<'_>>> {
    SettingsStore::open(SqliteStore::new(&pool.conn))
}

/// Aladhan client wrapped in the response cache of `pool`.
pub(crate) fn build_provider<'a>(
    cfg: &Config,
    pool: &'a DbPool,
) -> AppResult<CachedProvider<'a, AladhanClient>> {
    let client = AladhanClient::new(&cfg.api_base_url, cfg.request_timeout())?;
    Ok(CachedProvider::new(
        client,
        &pool.conn,
        cfg.daily_cache_ttl_secs,
        cfg.calendar_cache_ttl_secs,
    ))
}

/// Hint shown until the user saves a location for the first time.
pub(crate) fn first_run_hint<S: crate::db::kv::KeyValueStore>(store: &SettingsStore<S>) {
    if store.is_first_run() {
        info(format!(
            "No location saved yet, showing {}. Set yours with: ramadansync settings --city <CITY> --country <COUNTRY>",
            store.get().location_label()
        ));
    }
}
