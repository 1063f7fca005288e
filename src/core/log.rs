use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 60;

/// One row of the internal `log` table, ready for display.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" => Colour::Green,
        "mark_read" => Colour::Cyan,
        "load_fallback" => Colour::Red,
        "export" => Colour::Yellow,
        "backup" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn load_entries(conn: &Connection) -> AppResult<Vec<LogEntry>> {
        let mut stmt = conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    /// Format entries as `id: date | op (target) => message`, with the
    /// operation coloured and the op column capped at 60 visible chars.
    pub fn format_entries(entries: &[LogEntry], color: bool) -> Vec<String> {
        let op_targets: Vec<String> = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                }
            })
            .collect();

        let op_w = op_targets
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        entries
            .iter()
            .zip(op_targets)
            .map(|(e, op_target)| {
                let visible = if op_target.chars().count() > MAX_OP_WIDTH {
                    let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                    s.push_str("...");
                    s
                } else {
                    op_target
                };

                // only the operation word is coloured
                let shown = if color {
                    let paint = color_for_operation(&e.operation);
                    match visible.split_once(' ') {
                        Some((op_word, rest)) => format!("{} {}", paint.paint(op_word), rest),
                        None => paint.paint(visible.as_str()).to_string(),
                    }
                } else {
                    visible
                };

                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&shown).chars().count()));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id,
                    e.date,
                    shown,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(conn: &Connection, color: bool) -> AppResult<()> {
        let entries = Self::load_entries(conn)?;

        println!("📜 Internal log:\n");
        if entries.is_empty() {
            println!("(empty)");
            return Ok(());
        }
        for line in Self::format_entries(&entries, color) {
            println!("{}", line);
        }
        Ok(())
    }
}
