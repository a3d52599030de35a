//! Working-day calendar.
//!
//! Maps schedule slots onto calendar dates. Lunches happen on working
//! days only; a date that falls on a weekend day is pushed forward to
//! the next working day.
//!
//! # Date Model
//! Dates are plain calendar dates ([`NaiveDate`]) without time zone.
//! Weekend days default to Saturday and Sunday.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Weekend definition used for date adjustment.
///
/// If every weekday is marked as weekend there is no working day to move
/// to, and dates are returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Days on which no lunch is scheduled.
    pub weekend: Vec<Weekday>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            weekend: vec![Weekday::Sat, Weekday::Sun],
        }
    }
}

impl Calendar {
    /// Creates a calendar with a Saturday/Sunday weekend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar with no weekend (every day is a working day).
    pub fn every_day() -> Self {
        Self {
            weekend: Vec::new(),
        }
    }

    /// Replaces the weekend days.
    pub fn with_weekend(mut self, weekend: impl IntoIterator<Item = Weekday>) -> Self {
        self.weekend = weekend.into_iter().collect();
        self.weekend.sort_by_key(|d| d.num_days_from_monday());
        self.weekend.dedup();
        self
    }

    /// Whether `date` falls on a weekend day.
    #[inline]
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    /// Whether at least one day of the week is a working day.
    pub fn has_working_days(&self) -> bool {
        let mut days = self.weekend.clone();
        days.sort_by_key(|d| d.num_days_from_monday());
        days.dedup();
        days.len() < 7
    }

    /// Returns the first working day at or after `date`.
    ///
    /// Idempotent: a working day is returned unchanged, and the result of
    /// one adjustment is always a working day.
    pub fn adjust_for_weekend(&self, date: NaiveDate) -> NaiveDate {
        if !self.has_working_days() {
            return date;
        }
        let mut current = date;
        while self.is_weekend(current) {
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// Date of the lunch following one held on `previous`.
    ///
    /// Advances one calendar day, then adjusts for the weekend.
    pub fn next_lunch_date(&self, previous: NaiveDate) -> NaiveDate {
        let next = previous.succ_opt().unwrap_or(previous);
        self.adjust_for_weekend(next)
    }

    /// Working-day dates for `count` consecutive lunches starting at `start`.
    pub fn lunch_dates(&self, start: NaiveDate, count: usize) -> Vec<NaiveDate> {
        let mut dates = Vec::with_capacity(count);
        let mut current = self.adjust_for_weekend(start);
        for i in 0..count {
            if i > 0 {
                current = self.next_lunch_date(current);
            }
            dates.push(current);
        }
        dates
    }
}

/// Adjusts `date` forward past a Saturday/Sunday weekend.
///
/// ```
/// use chrono::NaiveDate;
/// use lunch_schedule::models::adjust_for_weekend;
///
/// let saturday = NaiveDate::from_ymd_opt(2021, 3, 20).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2021, 3, 22).unwrap();
/// assert_eq!(adjust_for_weekend(saturday), monday);
/// assert_eq!(adjust_for_weekend(monday), monday);
/// ```
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    Calendar::default().adjust_for_weekend(date)
}

/// English weekday name of `date` ("Monday", "Tuesday", ...).
pub fn day_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
