use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::{DevotionalStore, STORAGE_KEY};
use crate::db::migrate::run_pending_migrations_verbose;
use crate::db::pool::DbPool;
use crate::db::{stats, storage};
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, error, info, success};
use crate::utils::colors::{CYAN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
        reset,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations_verbose(&pool.conn)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            let result: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity OK.");
            } else {
                error(format!("Integrity check failed: {}", result));
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database optimized.");
        }

        //
        // 4) RESET
        //
        if *reset {
            if ask_confirmation("Delete all stored devotionals? This action is irreversible.") {
                run_pending_migrations_verbose(&pool.conn)?;
                if storage::remove_item(&pool.conn, STORAGE_KEY)? {
                    success("Stored devotionals removed.");
                } else {
                    info("Nothing stored yet.");
                }
            } else {
                info("Operation cancelled.");
            }
        }

        //
        // 5) INFO
        //
        if *show_info {
            let store = DevotionalStore::open(pool, cfg.seed_defaults)?;
            stats::print_db_info(&store, &cfg.database)?;
        }
    }

    Ok(())
}
