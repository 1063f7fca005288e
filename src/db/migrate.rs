use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// A single schema step, applied at most once per database.
struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260301_0001_create_storage",
        description: "Create key/value storage table",
        apply: create_storage_table,
    },
    Migration {
        version: "20260412_0002_storage_updated_at_index",
        description: "Index storage rows by update time",
        apply: index_storage_updated_at,
    },
];

/// Ensure that the `log` table exists. It doubles as the migration ledger,
/// so it is created before anything else.
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

fn create_storage_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS storage (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn index_storage_updated_at(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_storage_updated_at ON storage(updated_at);")?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, m: &Migration) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.description],
    )?;
    Ok(())
}

/// Versions not yet recorded in the log table, in application order.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Apply every pending migration. Idempotent: a second run is a no-op.
/// Returns how many migrations were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch("BEGIN;")?;
        let step = (m.apply)(conn).and_then(|_| mark_applied(conn, m));
        match step {
            Ok(()) => {
                conn.execute_batch("COMMIT;")?;
                applied += 1;
            }
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK;");
                return Err(AppError::Migration(format!("{}: {}", m.version, e)));
            }
        }
    }

    Ok(applied)
}

/// Same as `run_pending_migrations`, announcing what happened.
pub fn run_pending_migrations_verbose(conn: &Connection) -> AppResult<()> {
    let applied = run_pending_migrations(conn)?;
    if applied > 0 {
        success(format!("Applied {} migration(s).", applied));
    } else {
        success("Database schema is up to date.");
    }
    Ok(())
}
