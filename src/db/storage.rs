//! Durable key/value storage on top of the `storage` table.

use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Read the raw value stored under `key`, if any.
pub fn get_item(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row("SELECT value FROM storage WHERE key = ?1", [key], |row| {
        row.get(0)
    })
    .optional()
}

/// Insert or overwrite `key`.
pub fn set_item(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn remove_item(conn: &Connection, key: &str) -> Result<bool> {
    let n = conn.execute("DELETE FROM storage WHERE key = ?1", [key])?;
    Ok(n > 0)
}

/// Timestamp of the last write to `key`.
pub fn updated_at(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT updated_at FROM storage WHERE key = ?1",
        [key],
        |row| row.get(0),
    )
    .optional()
}
