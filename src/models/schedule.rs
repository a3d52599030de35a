//! Lunch schedule (solution) model.
//!
//! A schedule is the full sequence of lunch days produced from one roster
//! snapshot. Schedules are immutable values: filtering produces a new
//! schedule that keeps the original `id`, so identity comparisons still
//! recognise a filtered view as "the same schedule".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Employee, LunchDay};
use crate::error::{LunchError, Result};

/// A complete lunch schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunchSchedule {
    /// Instance identity.
    pub id: Uuid,
    /// First lunch date (weekend-adjusted).
    pub start_date: NaiveDate,
    /// Last lunch date.
    pub end_date: NaiveDate,
    /// Roster the schedule was generated for.
    pub employees: Vec<Employee>,
    /// Lunch days in chronological order.
    #[serde(rename = "lunchDays")]
    pub days: Vec<LunchDay>,
}

impl LunchSchedule {
    /// Creates a schedule with a fresh id.
    ///
    /// `end_date` is the date of the last day, or `start_date` when
    /// `days` is empty.
    pub fn new(start_date: NaiveDate, days: Vec<LunchDay>, employees: Vec<Employee>) -> Self {
        let end_date = days.last().map_or(start_date, |d| d.date);
        Self {
            id: Uuid::new_v4(),
            start_date,
            end_date,
            employees,
            days,
        }
    }

    /// Creates a schedule with no days and no employees.
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, Vec::new(), Vec::new())
    }

    /// Whether the schedule has no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of lunch days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of teams across all days.
    pub fn team_count(&self) -> usize {
        self.days.iter().map(LunchDay::team_count).sum()
    }

    /// Employee names in roster order.
    pub fn employee_names(&self) -> Vec<&str> {
        self.employees.iter().map(|e| e.name.as_str()).collect()
    }

    /// Whether `name` is on this schedule's roster.
    pub fn contains_employee(&self, name: &str) -> bool {
        self.employees.iter().any(|e| e.name == name)
    }

    /// Whether two schedules are the same instance (same `id`).
    #[inline]
    pub fn same_instance(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Finds the day scheduled on `date`.
    pub fn day_on(&self, date: NaiveDate) -> Option<&LunchDay> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Lunch partners of `name`, one per day, in date order.
    pub fn partners_of(&self, name: &str) -> Vec<(NaiveDate, &str)> {
        self.days
            .iter()
            .filter_map(|day| {
                day.team_for(name)
                    .and_then(|t| t.partner_of(name))
                    .map(|p| (day.date, p))
            })
            .collect()
    }

    /// New schedule whose days keep only the teams including `name`.
    ///
    /// Every day is kept; the `id`, dates, and roster are unchanged.
    ///
    /// # Errors
    /// [`LunchError::FilterStringNotFound`] if `name` is not an employee of
    /// this schedule.
    pub fn filter_by_employee(&self, name: &str) -> Result<Self> {
        if !self.contains_employee(name) {
            return Err(LunchError::FilterStringNotFound {
                name: name.to_string(),
            });
        }
        Ok(Self {
            id: self.id,
            start_date: self.start_date,
            end_date: self.end_date,
            employees: self.employees.clone(),
            days: self.days.iter().map(|d| d.filtered_for(name)).collect(),
        })
    }
}
