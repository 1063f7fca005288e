// src/export/logic.rs

use crate::core::store::DevotionalStore;
use crate::db::log::ttlog_or_warn;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::range::parse_range;
use crate::export::{DevotionalExport, ExportFormat};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export devotionals, oldest first.
    ///
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"`, or a `parse_range` expression
    pub fn export(
        store: &DevotionalStore,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = Self::collect_rows(store, bounds);
        if rows.is_empty() {
            warning("No devotionals found for the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog_or_warn(
            store.conn(),
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} devotional(s) as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }

    /// Rows inside `bounds` (inclusive), sorted by date.
    pub fn collect_rows(
        store: &DevotionalStore,
        bounds: Option<(chrono::NaiveDate, chrono::NaiveDate)>,
    ) -> Vec<DevotionalExport> {
        let mut selected: Vec<_> = store
            .records()
            .iter()
            .filter(|d| match bounds {
                Some((from, to)) => d.date.date() >= from && d.date.date() <= to,
                None => true,
            })
            .collect();
        selected.sort_by_key(|d| d.date);
        selected.into_iter().map(DevotionalExport::from).collect()
    }
}
