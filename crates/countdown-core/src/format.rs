//! Countdown labels and due-date urgency.
//!
//! Gaps are measured in calendar terms by anchored subtraction: Jan 4 to
//! Feb 4 is "1 month" even though January has 31 days. Day remainders of a
//! week or more collapse into weeks.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::{month_length, previous_month, CalendarDate};
use crate::error::CoreError;

/// Label used when both dates fall on the same calendar day.
pub const TODAY_LABEL: &str = "today";
/// Prefix marking a date in the past.
pub const PAST_PREFIX: char = '←';
/// Days ahead of the reference date that still count as nearly due.
pub const NEARLY_DUE_WINDOW_DAYS: u32 = 3;

/// Calendar distance between two dates, largest units first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CalendarGap {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    /// The target lies before the reference date.
    pub is_past: bool,
}

impl CalendarGap {
    /// Same calendar day.
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.weeks == 0 && self.days == 0
    }

    /// Non-zero components, e.g. `["1 month", "2 days"]`.
    pub fn components(&self) -> Vec<String> {
        [
            (self.years, "year"),
            (self.months, "month"),
            (self.weeks, "week"),
            (self.days, "day"),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| pluralize(count, unit))
        .collect()
    }
}

impl fmt::Display for CalendarGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str(TODAY_LABEL);
        }
        if self.is_past {
            write!(f, "{PAST_PREFIX}")?;
        }
        f.write_str(&self.components().join(", "))
    }
}

fn pluralize(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Decompose the distance from `reference` to `target` into calendar units.
pub fn calendar_gap(target: CalendarDate, reference: CalendarDate) -> CalendarGap {
    let target = target.normalized();
    let reference = reference.normalized();

    let is_past = target < reference;
    let (earlier, later) = if is_past {
        (target, reference)
    } else {
        (reference, target)
    };

    let mut years = i64::from(later.year()) - i64::from(earlier.year());
    let mut months = later.month() as i32 - earlier.month() as i32;
    let mut days = later.day() as i32 - earlier.day() as i32;

    if days < 0 {
        months -= 1;
        let (year, month) = previous_month(later.year(), later.month());
        days += month_length(year, month) as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    // A short preceding month can leave the borrow negative (Jan 31 to Mar 1);
    // such a remainder contributes no day component.
    let days = days.max(0) as u32;

    CalendarGap {
        years: u32::try_from(years.max(0)).unwrap_or(u32::MAX),
        months: months as u32,
        weeks: days / 7,
        days: days % 7,
        is_past,
    }
}

/// Human-readable countdown from `reference` to `target`.
///
/// ```
/// use countdown_core::date::CalendarDate;
/// use countdown_core::format::format_duration;
///
/// let today = CalendarDate::from_components(2024, 1, 4);
/// let later = CalendarDate::from_components(2024, 2, 5);
/// assert_eq!(format_duration(later, today), "1 month, 1 day");
/// assert_eq!(format_duration(today, later), "←1 month, 1 day");
/// assert_eq!(format_duration(today, today), "today");
/// ```
pub fn format_duration(target: CalendarDate, reference: CalendarDate) -> String {
    calendar_gap(target, reference).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrgencyTier {
    Overdue,
    Due,
    NearlyDue,
    Future,
}

impl UrgencyTier {
    pub const ALL: [UrgencyTier; 4] = [
        UrgencyTier::Overdue,
        UrgencyTier::Due,
        UrgencyTier::NearlyDue,
        UrgencyTier::Future,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyTier::Overdue => "overdue",
            UrgencyTier::Due => "due",
            UrgencyTier::NearlyDue => "nearly-due",
            UrgencyTier::Future => "future",
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "overdue" => Ok(UrgencyTier::Overdue),
            "due" => Ok(UrgencyTier::Due),
            "nearly-due" => Ok(UrgencyTier::NearlyDue),
            "future" => Ok(UrgencyTier::Future),
            _ => Err(CoreError::InvalidUrgency(s.to_string())),
        }
    }
}

/// Urgency of a due date relative to `reference`.
pub fn classify_due_date(due: CalendarDate, reference: CalendarDate) -> UrgencyTier {
    classify_due_date_within(due, reference, NEARLY_DUE_WINDOW_DAYS)
}

/// Like [`classify_due_date`] with a custom nearly-due window.
///
/// Overdue and due are decided by [`CalendarDate::compare`] on the dates as
/// written. The reference date is then stepped forward a day at a time rather
/// than subtracting day numbers, so month and year boundaries need no special
/// handling. Stepping always yields real dates, so an out-of-range due date
/// such as June 31st is never reached and stays `Future`.
pub fn classify_due_date_within(
    due: CalendarDate,
    reference: CalendarDate,
    window_days: u32,
) -> UrgencyTier {
    match due.compare(&reference) {
        Ordering::Less => UrgencyTier::Overdue,
        Ordering::Equal => UrgencyTier::Due,
        Ordering::Greater => {
            let mut step = reference;
            for _ in 0..window_days {
                step = step.add_one_day();
                if step == due {
                    return UrgencyTier::NearlyDue;
                }
            }
            UrgencyTier::Future
        }
    }
}
