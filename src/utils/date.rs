use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Canonical `YYYY-MM-DD` key of a calendar day.
///
/// Every lookup in the store and on the calendar goes through this type, so two
/// spellings of the same day (`2024-1-5`, `2024-01-05T08:00:00Z`) always
/// compare equal once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn today() -> Self {
        Self(today())
    }

    /// Normalize user or storage input into a key.
    ///
    /// Accepts a plain date, or a timestamp whose date part comes before a
    /// `T` or a space.
    pub fn parse(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        let date_part = trimmed
            .split(['T', ' '])
            .next()
            .unwrap_or(trimmed);

        NaiveDate::parse_from_str(date_part, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| AppError::InvalidDate(s.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day before, saturating at chrono's minimum date.
    pub fn pred(&self) -> Self {
        Self(self.0.checked_sub_days(Days::new(1)).unwrap_or(self.0))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Number of days in `month` (1..=12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return 0,
    };
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match next_first {
        Some(n) => (n - first).num_days() as u32,
        // December of chrono's last representable year
        None => 31,
    }
}

/// Weekday index of the 1st of the month, Sunday = 0.
pub fn first_weekday_from_sunday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}
