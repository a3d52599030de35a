//! Off-thread schedule generation.
//!
//! Generation is pure and synchronous; callers that must not block (a UI
//! loop, an async service) hand a [`GenerationRequest`] to the blocking
//! pool and feed the result back into
//! [`ScheduleStore::complete_generation`](crate::store::ScheduleStore::complete_generation).
//! In-flight requests are never cancelled: whichever result is delivered
//! last becomes the store's freshest schedule.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{LunchError, Result};
use crate::models::{Employee, LunchSchedule};
use crate::roster::RosterSource;
use crate::scheduler::RoundRobinScheduler;

/// Everything needed to generate one schedule.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Scheduler (calendar and seed) to use.
    pub scheduler: RoundRobinScheduler,
    /// Roster snapshot.
    pub employees: Vec<Employee>,
    /// Requested start date (adjusted for the weekend during generation).
    pub start_date: NaiveDate,
}

impl GenerationRequest {
    /// Creates a request.
    pub fn new(
        scheduler: RoundRobinScheduler,
        employees: Vec<Employee>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            scheduler,
            employees,
            start_date,
        }
    }

    /// Generates on the current thread.
    pub fn execute(&self) -> Result<LunchSchedule> {
        self.scheduler.generate(&self.employees, self.start_date)
    }

    /// Generates on the blocking thread pool.
    ///
    /// # Errors
    /// Scheduler errors, or [`LunchError::WorkerFailed`] if the task
    /// panicked.
    pub async fn run(self) -> Result<LunchSchedule> {
        debug!(employees = self.employees.len(), "spawning schedule generation");
        tokio::task::spawn_blocking(move || self.execute())
            .await
            .map_err(join_error)?
    }
}

/// Fetches a roster and generates a schedule on the blocking thread pool.
///
/// Roster fetches may perform blocking I/O, so both steps run off the
/// async executor.
pub async fn fetch_and_generate(
    source: Arc<dyn RosterSource + Send + Sync>,
    scheduler: RoundRobinScheduler,
    start_date: NaiveDate,
) -> Result<LunchSchedule> {
    tokio::task::spawn_blocking(move || {
        let employees = source.fetch()?;
        scheduler.generate(&employees, start_date)
    })
    .await
    .map_err(join_error)?
}

fn join_error(err: tokio::task::JoinError) -> LunchError {
    LunchError::WorkerFailed {
        reason: err.to_string(),
    }
}
