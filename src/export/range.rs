// src/export/range.rs

use crate::core::calendar::MonthCursor;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{DateKey, days_in_month};
use chrono::NaiveDate;

/// Parse `--range` into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any two of the above joined by `:` (start:end)
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match r.split_once(':') {
        Some((start, end)) => {
            let (from, _) = parse_period(start.trim())?;
            let (_, to) = parse_period(end.trim())?;
            if from > to {
                return Err(AppError::InvalidDate(format!(
                    "range start {} is after end {}",
                    from, to
                )));
            }
            Ok((from, to))
        }
        None => parse_period(r.trim()),
    }
}

/// First and last day of a single year, month or day.
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        7 => {
            let m = MonthCursor::parse(p).map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(m.year, m.month, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(m.year, m.month, days_in_month(m.year, m.month))
                .ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        _ => {
            let d = DateKey::parse(p)?.date();
            Ok((d, d))
        }
    }
}
