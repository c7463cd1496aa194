use chrono::{Datelike, Local};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{lahore_query, rs, sample_day, sample_month, seed_daily, seed_monthly, setup_test_db, temp_out};

fn save_lahore(name: &str, db_path: &str) {
    rs(name)
        .args(["--db", db_path, "settings", "--city", "Lahore", "--country", "Pakistan"])
        .assert()
        .success()
        .stdout(contains("Settings saved."))
        .stdout(contains("Lahore, Pakistan"));
}

#[test]
fn test_init_in_test_mode_creates_the_database() {
    let db_path = setup_test_db("cli_init");

    rs("cli_init")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_methods_lists_codes() {
    rs("cli_methods")
        .arg("methods")
        .assert()
        .success()
        .stdout(contains("ISNA (North America)"))
        .stdout(contains("Egyptian General Authority of Survey"))
        .stdout(contains("Hanafi"));
}

#[test]
fn test_settings_defaults_on_first_run() {
    let db_path = setup_test_db("cli_settings_defaults");

    rs("cli_settings_defaults")
        .args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("San Francisco, United States"))
        .stdout(contains("nothing has been saved yet"));
}

#[test]
fn test_settings_rejects_empty_city() {
    let db_path = setup_test_db("cli_settings_empty_city");

    rs("cli_settings_empty_city")
        .args(["--db", &db_path, "settings", "--city", "", "--country", "X"])
        .assert()
        .failure()
        .stderr(contains("City is required"))
        .stderr(contains("Country is required").not());

    // nothing was persisted
    rs("cli_settings_empty_city")
        .args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("San Francisco"));
}

#[test]
fn test_settings_persist_between_runs() {
    let db_path = setup_test_db("cli_settings_persist");
    save_lahore("cli_settings_persist", &db_path);

    rs("cli_settings_persist")
        .args(["--db", &db_path, "settings", "--method", "1", "--school", "1"])
        .assert()
        .success();

    rs("cli_settings_persist")
        .args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("Lahore, Pakistan"))
        .stdout(contains("Karachi"))
        .stdout(contains("Hanafi"))
        .stdout(contains("nothing has been saved yet").not());
}

#[test]
fn test_settings_out_of_range_method_is_rejected_by_parser() {
    let db_path = setup_test_db("cli_settings_bad_method");

    rs("cli_settings_bad_method")
        .args(["--db", &db_path, "settings", "--method", "9"])
        .assert()
        .failure();
}

#[test]
fn test_settings_reset() {
    let db_path = setup_test_db("cli_settings_reset");
    save_lahore("cli_settings_reset", &db_path);

    rs("cli_settings_reset")
        .args(["--db", &db_path, "settings", "--reset"])
        .assert()
        .success()
        .stdout(contains("San Francisco"));

    rs("cli_settings_reset")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("settings_reset"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_today_reads_the_cached_day() {
    let db_path = setup_test_db("cli_today");
    save_lahore("cli_today", &db_path);

    let today = Local::now().date_naive();
    let day = sample_day(today, "05:12 (PKT)", "18:20 (PKT)", 14, 9);
    seed_daily(&db_path, &lahore_query(), today, &day);

    rs("cli_today")
        .args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("Lahore, Pakistan"))
        .stdout(contains("Time remaining until"))
        .stdout(contains("Iftar (Maghrib)"))
        .stdout(contains("5:12 AM"))
        .stdout(contains("14-09-1447"));
}

#[test]
fn test_today_unavailable_when_api_is_down() {
    let db_path = setup_test_db("cli_today_down");

    rs("cli_today_down")
        .args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("currently unavailable"));
}

#[test]
fn test_countdown_single_tick_from_cache() {
    let db_path = setup_test_db("cli_countdown");
    save_lahore("cli_countdown", &db_path);

    let today = Local::now().date_naive();
    seed_daily(
        &db_path,
        &lahore_query(),
        today,
        &sample_day(today, "05:12 (PKT)", "18:20 (PKT)", 14, 9),
    );

    rs("cli_countdown")
        .args(["--db", &db_path, "countdown", "--ticks", "1"])
        .assert()
        .success()
        .stdout(contains("Time remaining until"));
}

#[test]
fn test_calendar_from_cache_and_export() {
    let db_path = setup_test_db("cli_calendar");
    save_lahore("cli_calendar", &db_path);
    seed_monthly(&db_path, &lahore_query(), 2026, 2, &sample_month(2026, 2, 19));

    rs("cli_calendar")
        .args(["--db", &db_path, "calendar", "--year", "2026", "--month", "2"])
        .assert()
        .success()
        .stdout(contains("Calendar 2026-02"))
        .stdout(contains("2026-02-01"))
        .stdout(contains("2026-02-28"));

    let out = temp_out("cli_calendar", "csv");
    rs("cli_calendar")
        .args([
            "--db", &db_path, "calendar", "--year", "2026", "--month", "2", "--ramadan",
            "--export", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 11);
    assert!(content.contains("2026-02-19"));
    assert!(!content.contains("2026-02-18"));
}

#[test]
fn test_calendar_unavailable_when_api_is_down() {
    let db_path = setup_test_db("cli_calendar_down");
    let now = Local::now();

    rs("cli_calendar_down")
        .args([
            "--db",
            &db_path,
            "calendar",
            "--year",
            &now.year().to_string(),
            "--month",
            &now.month().to_string(),
        ])
        .assert()
        .success()
        .stdout(contains("Could not load monthly calendar for this location."));
}

#[test]
fn test_cache_info_and_clear() {
    let db_path = setup_test_db("cli_cache");
    let today = Local::now().date_naive();
    seed_daily(
        &db_path,
        &lahore_query(),
        today,
        &sample_day(today, "05:12", "18:20", 14, 9),
    );

    rs("cli_cache")
        .args(["--db", &db_path, "cache", "--info"])
        .assert()
        .success()
        .stdout(contains("daily|lahore|pakistan"));

    rs("cli_cache")
        .args(["--db", &db_path, "cache", "--clear"])
        .assert()
        .success()
        .stdout(contains("Removed 1 cached responses."));

    rs("cli_cache")
        .args(["--db", &db_path, "cache", "--info"])
        .assert()
        .success()
        .stdout(contains("empty"));
}

#[test]
fn test_config_print_shows_defaults() {
    let db_path = setup_test_db("cli_config_print");

    rs("cli_config_print")
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("api_base_url"))
        .stdout(contains("clock_format: 12h"));
}

#[test]
fn test_config_check_and_migrate() {
    let name = "cli_config_migrate";
    let home = common::test_home(name);
    let conf_dir = home.join(".ramadansync");
    fs::create_dir_all(&conf_dir).unwrap();
    let db_path = setup_test_db(name);
    fs::write(
        conf_dir.join("config.yml"),
        format!("database: {db_path}\nclock_format: 24h\n"),
    )
    .unwrap();

    rs(name)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("api_base_url"));

    rs(name).args(["config", "--migrate"]).assert().success();

    let migrated = fs::read_to_string(conf_dir.join("config.yml")).unwrap();
    assert!(migrated.contains("daily_cache_ttl_secs: 3600"));
    assert!(migrated.contains("clock_format: 24h"));

    rs(name)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));
}
