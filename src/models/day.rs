//! Lunch team and lunch day models.
//!
//! A lunch day is one round of the round-robin: a set of disjoint
//! two-person teams for a single calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::day_name;

/// Two employees having lunch together.
///
/// The pair is unordered; [`LunchTeam::pair_key`] gives a canonical form
/// for set comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunchTeam {
    /// First member's name.
    #[serde(rename = "firstEmployee")]
    pub first: String,
    /// Second member's name.
    #[serde(rename = "secondEmployee")]
    pub second: String,
}

impl LunchTeam {
    /// Creates a team from two names.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Whether `name` is a member of this team.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }

    /// The other member, if `name` belongs to this team.
    pub fn partner_of(&self, name: &str) -> Option<&str> {
        if self.first == name {
            Some(&self.second)
        } else if self.second == name {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Canonical (lexicographically ordered) member pair.
    pub fn pair_key(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

/// One scheduled lunch date with its teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunchDay {
    /// Calendar date (always a working day for generated schedules).
    pub date: NaiveDate,
    /// English weekday name of `date`.
    pub day_name: String,
    /// Teams meeting on this date.
    #[serde(rename = "lunchTeams")]
    pub teams: Vec<LunchTeam>,
}

impl LunchDay {
    /// Creates a day; `day_name` is derived from `date`.
    pub fn new(date: NaiveDate, teams: Vec<LunchTeam>) -> Self {
        Self {
            date,
            day_name: day_name(date),
            teams,
        }
    }

    /// Number of teams on this day.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// The team `name` belongs to on this day.
    pub fn team_for(&self, name: &str) -> Option<&LunchTeam> {
        self.teams.iter().find(|t| t.contains(name))
    }

    /// Names of everyone lunching on this day, in team order.
    pub fn attendees(&self) -> impl Iterator<Item = &str> {
        self.teams
            .iter()
            .flat_map(|t| [t.first.as_str(), t.second.as_str()])
    }

    /// Copy of this day keeping only teams that include `name`.
    pub fn filtered_for(&self, name: &str) -> Self {
        Self {
            date: self.date,
            day_name: self.day_name.clone(),
            teams: self
                .teams
                .iter()
                .filter(|t| t.contains(name))
                .cloned()
                .collect(),
        }
    }
}
