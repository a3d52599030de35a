//! Round-robin lunch scheduler and coverage report.
//!
//! # Algorithm
//!
//! `RoundRobinScheduler` uses the circle method: one seat is fixed and the
//! rest rotate one step per round, giving `N - 1` rounds in which every
//! pair of employees meets exactly once. Rounds are mapped onto working
//! days by the scheduler's [`Calendar`](crate::models::Calendar).
//!
//! # Report
//!
//! `PairingReport` checks a schedule for duplicate or missing pairs and
//! for days that do not split the roster into teams exactly once.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in sports"
//! - Harary (1969), "Graph Theory", Ch. 9: 1-factorization of K_2n

mod report;
mod round_robin;

pub use report::PairingReport;
pub use round_robin::{generate_schedule, RoundRobinScheduler};
