//! Timezone-free civil dates.
//!
//! [`CalendarDate`] is a bare year/month/day triple with no time-of-day and no
//! offset, so comparing two dates never shifts across midnight the way
//! instant-based types can. Fields are not range checked on construction;
//! arithmetic goes through [`CalendarDate::normalized`], which applies the
//! Gregorian rollover rules (day 31 of a 30-day month is the 1st of the next
//! month, month 13 is January of the next year).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// A civil calendar date.
///
/// Ordering is lexicographic by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Trusted constructor. Callers are expected to have validated the parts.
    ///
    /// Any `i32` year is accepted. Arithmetic saturates at the ends of that
    /// range instead of overflowing, so dates are only meaningful well inside
    /// it (parsed literals are always within `1..=9999`).
    pub const fn from_components(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parse a strict `YYYY-MM-DD` literal.
    ///
    /// Only ASCII digits are accepted, with exactly four year digits and two
    /// digits each for month and day. A component whose value is zero (for
    /// example the `00` in `2025-00-14`) makes the literal invalid.
    pub fn parse(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let year = parse_digits(&bytes[0..4])?;
        let month = parse_digits(&bytes[5..7])?;
        let day = parse_digits(&bytes[8..10])?;

        if year == 0 || month == 0 || day == 0 {
            return None;
        }

        Some(Self::from_components(year as i32, month, day))
    }

    /// The caller's current local date.
    pub fn from_current_moment() -> Self {
        Local::now().date_naive().into()
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Three-way comparison by year, month, then day.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Roll out-of-range month and day fields into the following months.
    ///
    /// A zero month or day steps back one unit, matching how a day before the
    /// 1st resolves to the last day of the previous month.
    pub fn normalized(self) -> Self {
        let mut year = self.year;
        let mut month = self.month;
        let mut day = self.day;

        if month == 0 {
            year = year.saturating_sub(1);
            month = 12;
        }
        year = year.saturating_add(((month - 1) / 12) as i32);
        month = (month - 1) % 12 + 1;

        if day == 0 {
            (year, month) = previous_month(year, month);
            day = month_length(year, month);
        }
        while day > month_length(year, month) {
            day -= month_length(year, month);
            (year, month) = next_month(year, month);
        }

        Self { year, month, day }
    }

    /// The next calendar day.
    pub fn add_one_day(self) -> Self {
        let date = self.normalized();
        if date.day < month_length(date.year, date.month) {
            Self {
                day: date.day + 1,
                ..date
            }
        } else {
            let (year, month) = next_month(date.year, date.month);
            Self { year, month, day: 1 }
        }
    }

    /// Convert to a chrono date, normalizing first. `None` only when the year
    /// is outside chrono's supported range.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        let date = self.normalized();
        NaiveDate::from_ymd_opt(date.year, date.month, date.day)
    }
}

fn parse_digits(bytes: &[u8]) -> Option<u32> {
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(
        bytes
            .iter()
            .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0')),
    )
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a 1-based month, or `None` outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1..=12 => Some(month_length(year, month)),
        _ => None,
    }
}

/// Shared by day stepping, normalization and the duration borrow so they can
/// never disagree about month lengths. `month` must already be in `1..=12`.
pub(crate) fn month_length(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

pub(crate) fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year.saturating_sub(1), 12)
    } else {
        (year, month - 1)
    }
}

pub(crate) fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month + 1)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_components(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| CoreError::InvalidDate(s.to_string()))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        literal.parse().map_err(serde::de::Error::custom)
    }
}
