//! Month grid for the home-page calendar.
//!
//! Weeks start on Sunday and are seven columns wide. The grid only reads the
//! store to flag days that already have a devotional.

use crate::core::store::DevotionalStore;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREY, RESET, ROSE, TODAY};
use crate::utils::date::{DateKey, days_in_month, first_weekday_from_sunday};
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The month the calendar is showing. `month` is 1-based (1 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(AppError::InvalidMonth(format!("{:04}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::containing(DateKey::today().date())
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let err = || AppError::InvalidMonth(s.to_string());
        let (y, m) = s.trim().split_once('-').ok_or_else(err)?;
        let year: i32 = y.parse().map_err(|_| err())?;
        let month: u32 = m.parse().map_err(|_| err())?;
        Self::new(year, month).map_err(|_| err())
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub key: DateKey,
    pub is_today: bool,
    pub has_record: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the 1st of the month.
    Blank,
    Day(DayCell),
}

impl CalendarCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, CalendarCell::Blank)
    }
}

/// Cells for `cursor`: one blank per weekday before the 1st, then every day.
pub fn build_month(cursor: MonthCursor, store: &DevotionalStore, today: DateKey) -> Vec<CalendarCell> {
    build_month_with(cursor, today, |key| store.contains_date(key))
}

/// Grid builder over any membership test.
pub fn build_month_with<F>(cursor: MonthCursor, today: DateKey, has_record: F) -> Vec<CalendarCell>
where
    F: Fn(&DateKey) -> bool,
{
    let blanks = first_weekday_from_sunday(cursor.year, cursor.month) as usize;
    let days = days_in_month(cursor.year, cursor.month);

    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.extend(std::iter::repeat_n(CalendarCell::Blank, blanks));

    for day in 1..=days {
        let Some(date) = NaiveDate::from_ymd_opt(cursor.year, cursor.month, day) else {
            continue;
        };
        let key = DateKey::new(date);
        cells.push(CalendarCell::Day(DayCell {
            date,
            key,
            is_today: key == today,
            has_record: has_record(&key),
        }));
    }

    cells
}

/// Text grid: title, weekday header, then rows of seven 4-column cells.
/// Days with content carry a heart; today is highlighted.
pub fn render_month(cursor: MonthCursor, cells: &[CalendarCell], color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", cursor.month_name(), cursor.year));

    for h in WEEKDAY_HEADER {
        out.push_str(&format!(" {:<3}", h));
    }
    out.push('\n');

    for week in cells.chunks(7) {
        for cell in week {
            match cell {
                CalendarCell::Blank => out.push_str("    "),
                CalendarCell::Day(d) => {
                    let marker = if d.has_record { "♥" } else { " " };
                    let day = format!("{:>2}", d.date.day());
                    if !color {
                        out.push_str(&format!(" {}{}", day, marker));
                    } else if d.is_today {
                        out.push_str(&format!(" {TODAY}{day}{RESET}{ROSE}{marker}{RESET}"));
                    } else if d.has_record {
                        out.push_str(&format!(" {day}{ROSE}{marker}{RESET}"));
                    } else {
                        out.push_str(&format!(" {GREY}{day}{RESET}{marker}"));
                    }
                }
            }
        }
        out.push('\n');
    }

    out
}
