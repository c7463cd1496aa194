use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::method::{CalculationMethod, School};
use crate::models::settings::{SettingsPatch, UserSettings};
use crate::ui::messages::{header, info, success};

fn print_settings(s: &UserSettings) {
    println!("📍 Location : {}", s.location_label());
    println!("🧮 Method   : {}", s.method);
    println!("📚 School   : {}", s.school);
}

/// Handle the `settings` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        city,
        country,
        method,
        school,
        reset,
    } = cmd
    {
        let pool = super::open_pool(cfg)?;
        let mut store = super::open_settings(&pool)?;

        // ---- RESET ----
        if *reset {
            store.reset()?;
            ttlog_quiet(&pool.conn, "settings_reset", "", "Settings reset to defaults");
            success("Settings reset to defaults.");
            print_settings(store.get());
            return Ok(());
        }

        let patch = SettingsPatch {
            city: city.clone(),
            country: country.clone(),
            method: method
                .map(|m| CalculationMethod::from_code(m).ok_or(AppError::InvalidMethod(m)))
                .transpose()?,
            school: school
                .map(|s| School::from_code(s).ok_or(AppError::InvalidSchool(s)))
                .transpose()?,
        };

        // ---- SHOW ----
        if patch.is_empty() {
            header("Current settings");
            print_settings(store.get());
            if store.is_first_run() {
                info("These are the defaults: nothing has been saved yet.");
            }
            return Ok(());
        }

        // ---- SAVE ----
        let saved = store.set(patch)?.clone();
        ttlog_quiet(
            &pool.conn,
            "settings",
            &saved.location_label(),
            &format!("method={} school={}", saved.method.code(), saved.school.code()),
        );

        success("Settings saved.");
        print_settings(&saved);
    }

    Ok(())
}
