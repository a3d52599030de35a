//! Round-robin lunch scheduler (circle method).
//!
//! # Algorithm
//!
//! 1. Validate the roster: size (even, or exactly two), then unique,
//!    non-blank names.
//! 2. Shuffle the roster and split it into halves `A` and `B`.
//! 3. For each of the `N - 1` rounds, pair `A[j]` with `B[j]`. Between
//!    rounds, `A[0]` stays fixed and every other seat rotates one step:
//!    the last of `A` moves to the end of `B`, the first of `B` moves to
//!    `A[1]`.
//! 4. Map round `i` to the `i`-th working day from the start date.
//!
//! Fixing one seat and rotating the remaining `N - 1` seats yields a
//! 1-factorization of the complete graph `K_N`: every pair meets exactly
//! once, and every round is a perfect matching.
//!
//! # Complexity
//! O(N²) for N employees (N - 1 rounds of N / 2 teams).
//!
//! # Reference
//! Lucas (1883), "Récréations mathématiques", Vol. 2 (circle method);
//! de Werra (1981), "Scheduling in sports"

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Calendar, Employee, LunchDay, LunchSchedule, LunchTeam};
use crate::validation::{check_roster_size, ensure_valid_roster};

/// Round-robin lunch pairing scheduler.
///
/// Shuffling is intentional: two runs over the same roster produce
/// different (but equally complete) schedules unless a seed is set.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lunch_schedule::models::Employee;
/// use lunch_schedule::scheduler::RoundRobinScheduler;
///
/// let roster = Employee::roster(["A", "B", "C", "D"]);
/// let monday = NaiveDate::from_ymd_opt(2021, 3, 22).unwrap();
///
/// let schedule = RoundRobinScheduler::new().generate(&roster, monday).unwrap();
/// assert_eq!(schedule.day_count(), 3);
/// assert!(schedule.days.iter().all(|d| d.teams.len() == 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundRobinScheduler {
    calendar: Calendar,
    seed: Option<u64>,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with a Saturday/Sunday weekend and random shuffles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the working-day calendar.
    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Makes shuffles reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The calendar used for date assignment.
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Generates a schedule for `employees` starting on `start_date`.
    ///
    /// # Errors
    /// - [`crate::LunchError::NotEnoughEmployees`] for fewer than two employees
    /// - [`crate::LunchError::OddNumberOfEmployees`] for odd rosters above two
    /// - [`crate::LunchError::BadRosterSource`] for blank or duplicate names
    pub fn generate(&self, employees: &[Employee], start_date: NaiveDate) -> Result<LunchSchedule> {
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.generate_with_rng(employees, start_date, &mut rng)
            }
            None => self.generate_with_rng(employees, start_date, &mut rand::rng()),
        }
    }

    /// Generates a schedule using the given random source.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        employees: &[Employee],
        start_date: NaiveDate,
        rng: &mut R,
    ) -> Result<LunchSchedule> {
        let count = employees.len();
        check_roster_size(count)?;
        ensure_valid_roster(employees)?;

        let first_date = self.calendar.adjust_for_weekend(start_date);

        if count == 2 {
            let team = LunchTeam::new(&employees[0].name, &employees[1].name);
            let day = LunchDay::new(first_date, vec![team]);
            info!(start = %first_date, "generated single-team lunch schedule");
            return Ok(LunchSchedule::new(first_date, vec![day], employees.to_vec()));
        }

        let rounds = pair_rounds(employees, rng);
        let dates = self.calendar.lunch_dates(start_date, rounds.len());

        let days: Vec<LunchDay> = rounds
            .into_iter()
            .zip(dates)
            .map(|(teams, date)| LunchDay::new(date, teams))
            .collect();

        let schedule = LunchSchedule::new(first_date, days, employees.to_vec());
        info!(
            id = %schedule.id,
            employees = count,
            days = schedule.day_count(),
            start = %schedule.start_date,
            end = %schedule.end_date,
            "generated lunch schedule"
        );
        Ok(schedule)
    }
}

/// Builds the `N - 1` rounds of teams for an even roster of at least four.
fn pair_rounds<R: Rng + ?Sized>(employees: &[Employee], rng: &mut R) -> Vec<Vec<LunchTeam>> {
    let mut shuffled: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
    shuffled.shuffle(rng);

    let half = shuffled.len() / 2;
    let mut first: Vec<&str> = shuffled[..half].to_vec();
    let mut second: Vec<&str> = shuffled[half..].to_vec();

    let round_count = shuffled.len() - 1;
    let mut rounds = Vec::with_capacity(round_count);

    for round in 0..round_count {
        if round > 0 {
            rotate(&mut first, &mut second);
        }
        let mut teams: Vec<LunchTeam> = first
            .iter()
            .zip(second.iter())
            .map(|(a, b)| LunchTeam::new(*a, *b))
            .collect();
        teams.shuffle(rng);
        debug!(round, teams = teams.len(), "paired round");
        rounds.push(teams);
    }

    rounds
}

/// One circle-method step. `first[0]` never moves.
fn rotate<T>(first: &mut Vec<T>, second: &mut Vec<T>) {
    if first.is_empty() || second.is_empty() {
        return;
    }
    if let Some(last_of_first) = first.pop() {
        let first_of_second = second.remove(0);
        first.insert(1.min(first.len()), first_of_second);
        second.push(last_of_first);
    }
}

/// Generates a schedule with the default scheduler.
///
/// Shorthand for `RoundRobinScheduler::new().generate(employees, start_date)`.
pub fn generate_schedule(employees: &[Employee], start_date: NaiveDate) -> Result<LunchSchedule> {
    RoundRobinScheduler::new().generate(employees, start_date)
}
