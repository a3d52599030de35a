//! Error taxonomy.
//!
//! Every failure the scheduler, store, roster, and archive can report is a
//! [`LunchError`] value. Errors are cloneable so that store slots can keep
//! the failure that produced them and hand it to several observers.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LunchError>;

/// Errors raised while building, filtering, or persisting lunch schedules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LunchError {
    /// The roster could not be obtained or was malformed.
    #[error("bad roster source: {reason}")]
    BadRosterSource {
        /// What went wrong while reading the roster.
        reason: String,
    },

    /// Fewer than two employees were supplied.
    #[error("not enough employees ({count} < 2) for calculation")]
    NotEnoughEmployees {
        /// Roster size that was rejected.
        count: usize,
    },

    /// An odd roster larger than two cannot be split into pairs.
    #[error("there is an odd number of employees ({count})")]
    OddNumberOfEmployees {
        /// Roster size that was rejected.
        count: usize,
    },

    /// Filter name is not an employee of the active schedule.
    #[error("filtering for '{name}' is not possible for the given lunch days")]
    FilterStringNotFound {
        /// The requested filter name.
        name: String,
    },

    /// A persisted schedule that was referenced no longer exists.
    #[error("saved schedule '{name}' was not found")]
    SelectedScheduleNotFound {
        /// Display name (file name) of the missing schedule.
        name: String,
    },

    /// A persisted schedule blob could not be parsed.
    #[error("saved schedule could not be decoded: {reason}")]
    ScheduleDecodeFailed {
        /// Parser message.
        reason: String,
    },

    /// A schedule could not be serialized for saving.
    #[error("schedule could not be encoded: {reason}")]
    ScheduleEncodeFailed {
        /// Serializer message.
        reason: String,
    },

    /// Reading or writing the schedule archive failed.
    #[error("storage error at {}: {reason}", path.display())]
    Storage {
        /// Path that was being accessed.
        path: PathBuf,
        /// I/O error message.
        reason: String,
    },

    /// A background generation task panicked or was cancelled.
    #[error("schedule generation did not complete: {reason}")]
    WorkerFailed {
        /// Join error message.
        reason: String,
    },

    /// Configuration text could not be parsed.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Parser message.
        reason: String,
    },
}

impl LunchError {
    /// Creates a [`LunchError::BadRosterSource`].
    pub fn bad_roster(reason: impl Into<String>) -> Self {
        Self::BadRosterSource {
            reason: reason.into(),
        }
    }

    /// Creates a [`LunchError::Storage`] from an I/O error.
    pub fn storage(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Whether the error stems from an invalid roster size.
    pub fn is_roster_size(&self) -> bool {
        matches!(
            self,
            Self::NotEnoughEmployees { .. } | Self::OddNumberOfEmployees { .. }
        )
    }
}

impl From<serde_json::Error> for LunchError {
    fn from(err: serde_json::Error) -> Self {
        Self::ScheduleDecodeFailed {
            reason: err.to_string(),
        }
    }
}
