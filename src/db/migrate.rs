use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// A schema step: version tag, description, SQL batch.
struct Migration {
    version: &'static str,
    message: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260201_0001_create_kv_store",
        message: "Created kv_store table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20260201_0002_create_timings_cache",
        message: "Created timings_cache table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS timings_cache (
                key        TEXT PRIMARY KEY,
                kind       TEXT NOT NULL CHECK(kind IN ('daily','monthly')),
                payload    TEXT NOT NULL,
                fetched_at TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20260215_0003_cache_fetched_at_index",
        message: "Added fetched_at index to timings_cache",
        sql: r#"
            CREATE INDEX IF NOT EXISTS idx_timings_cache_fetched_at
                ON timings_cache(fetched_at);
        "#,
    },
];

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)?;
        mark_applied(&tx, m.version, m.message)?;
        tx.commit()?;

        log::info!("migration applied: {}", m.version);
        success(format!("Migration applied: {} → {}", m.version, m.message));
    }

    Ok(())
}

/// Versions already recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}
