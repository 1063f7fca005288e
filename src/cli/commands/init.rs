use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::DevotionalStore;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with `--test`)
///  - the SQLite database and all pending migrations
///  - the devotional collection (samples when nothing is stored yet)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing dailygrace…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    log::ttlog_or_warn(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    let store = DevotionalStore::open(pool, cfg.seed_defaults)?;
    println!("✅ Database initialized at {}", &db_path);
    println!("📖 Devotionals available: {}", store.len());

    println!("🎉 dailygrace initialization completed!");
    Ok(())
}
