use crate::core::store::{DevotionalStore, LoadSource, STORAGE_KEY};
use crate::db::migrate::pending_migrations;
use crate::db::storage;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

/// Summary numbers shown by `db --info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbStats {
    pub file_size: u64,
    pub devotionals: usize,
    pub read: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub log_rows: i64,
    pub updated_at: Option<String>,
    pub pending_migrations: usize,
}

pub fn collect(store: &DevotionalStore, db_path: &str) -> AppResult<DbStats> {
    let conn = store.conn();
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let log_rows: i64 = conn.query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;

    let mut dates: Vec<_> = store.records().iter().map(|d| d.date).collect();
    dates.sort();

    Ok(DbStats {
        file_size,
        devotionals: store.len(),
        read: store.records().iter().filter(|d| d.is_read()).count(),
        first_date: dates.first().map(|d| d.to_string()),
        last_date: dates.last().map(|d| d.to_string()),
        log_rows,
        updated_at: storage::updated_at(conn, STORAGE_KEY)?,
        pending_migrations: pending_migrations(conn)?.len(),
    })
}

pub fn print_db_info(store: &DevotionalStore, db_path: &str) -> AppResult<()> {
    let s = collect(store, db_path)?;
    println!();

    let file_kb = (s.file_size as f64) / 1024.0;
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    println!(
        "{}• Devotionals:{} {}{}{} ({} read)",
        CYAN, RESET, GREEN, s.devotionals, RESET, s.read
    );

    let dash = format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", s.first_date.as_deref().unwrap_or(&dash));
    println!("    to:   {}", s.last_date.as_deref().unwrap_or(&dash));
    println!(
        "{}• Last saved:{} {}",
        CYAN,
        RESET,
        s.updated_at.as_deref().unwrap_or(&dash)
    );

    let source = match store.source() {
        LoadSource::Persisted { version } => format!("stored payload (version {})", version),
        LoadSource::Seeded => "built-in samples".to_string(),
        LoadSource::Fallback(reason) => format!("built-in samples (stored data unreadable: {})", reason),
    };
    println!("{}• Loaded from:{} {}", CYAN, RESET, source);
    println!("{}• Log entries:{} {}", CYAN, RESET, s.log_rows);
    println!(
        "{}• Pending migrations:{} {}",
        CYAN, RESET, s.pending_migrations
    );

    println!();
    Ok(())
}
