//! Pairing coverage report.
//!
//! Measures how close a schedule is to a complete round-robin over its
//! roster. Generated schedules are complete by construction; the report
//! is for verifying schedules from elsewhere (loaded archives, hand edits).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Expected pairs | C(N, 2) for N employees |
//! | Distinct pairs | Unordered pairs seen at least once |
//! | Duplicate pairs | Pairs seen more than once |
//! | Missing pairs | Pairs never seen |
//! | Unpartitioned days | Days where the roster is not split exactly into teams |

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::models::LunchSchedule;

/// Coverage statistics for one schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingReport {
    /// Roster size.
    pub employee_count: usize,
    /// Number of lunch days.
    pub day_count: usize,
    /// Number of teams across all days.
    pub team_count: usize,
    /// C(N, 2).
    pub expected_pairs: usize,
    /// Unordered pairs seen at least once.
    pub distinct_pairs: usize,
    /// Pairs seen more than once, with their count.
    pub duplicate_pairs: Vec<((String, String), usize)>,
    /// Roster pairs never scheduled.
    pub missing_pairs: Vec<(String, String)>,
    /// Dates whose teams do not cover the roster exactly once.
    pub unpartitioned_days: Vec<NaiveDate>,
}

impl PairingReport {
    /// Computes the report for `schedule`.
    pub fn calculate(schedule: &LunchSchedule) -> Self {
        let names: BTreeSet<&str> = schedule.employees.iter().map(|e| e.name.as_str()).collect();

        let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
        let mut unpartitioned_days = Vec::new();

        for day in &schedule.days {
            let mut attendance: HashMap<&str, usize> = HashMap::new();
            for team in &day.teams {
                *counts.entry(team.pair_key()).or_insert(0) += 1;
                *attendance.entry(team.first.as_str()).or_insert(0) += 1;
                *attendance.entry(team.second.as_str()).or_insert(0) += 1;
            }
            let exact = attendance.len() == names.len()
                && attendance
                    .iter()
                    .all(|(name, &n)| n == 1 && names.contains(name));
            if !exact {
                unpartitioned_days.push(day.date);
            }
        }

        let names: Vec<&str> = names.into_iter().collect();
        let mut missing_pairs = Vec::new();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                if !counts.contains_key(&(*a, *b)) {
                    missing_pairs.push((a.to_string(), b.to_string()));
                }
            }
        }

        let duplicate_pairs = counts
            .iter()
            .filter(|&(_, &n)| n > 1)
            .map(|((a, b), &n)| ((a.to_string(), b.to_string()), n))
            .collect();

        let n = names.len();
        Self {
            employee_count: n,
            day_count: schedule.day_count(),
            team_count: schedule.team_count(),
            expected_pairs: n * n.saturating_sub(1) / 2,
            distinct_pairs: counts.len(),
            duplicate_pairs,
            missing_pairs,
            unpartitioned_days,
        }
    }

    /// Whether every pair meets exactly once and every day partitions the roster.
    pub fn is_complete(&self) -> bool {
        self.duplicate_pairs.is_empty()
            && self.missing_pairs.is_empty()
            && self.unpartitioned_days.is_empty()
    }

    /// Complete, with exactly `N - 1` days (one day for a pair of two).
    pub fn is_round_robin(&self) -> bool {
        self.is_complete() && self.day_count == self.employee_count.saturating_sub(1).max(1)
    }

    /// Fraction of expected pairs that were scheduled (0.0..1.0).
    pub fn coverage(&self) -> f64 {
        if self.expected_pairs == 0 {
            return 1.0;
        }
        (self.expected_pairs - self.missing_pairs.len()) as f64 / self.expected_pairs as f64
    }
}
