use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database_path();

    println!("⚙️  Initializing RamadanSync…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_path.display());

    //
    // 2️⃣ DATABASE (tables + migrations)
    //
    let pool = DbPool::open(&db_path)?;

    println!("✅ Database initialized at {}", db_path.display());

    //
    // 3️⃣ INTERNAL LOG (non blocking)
    //
    ttlog_quiet(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", db_path.display()),
    );

    println!("🎉 RamadanSync initialization completed!");
    Ok(())
}
