//! Schedule persistence.
//!
//! Schedules are stored as JSON snapshots mirroring [`LunchSchedule`]:
//!
//! ```json
//! {
//!   "id": "6f1c...",
//!   "startDate": "2021-03-22",
//!   "endDate": "2021-04-01",
//!   "employees": [{"name": "Ivana"}],
//!   "lunchDays": [
//!     {"date": "2021-03-22", "dayName": "Monday",
//!      "lunchTeams": [{"firstEmployee": "Ivana", "secondEmployee": "Tim"}]}
//!   ]
//! }
//! ```
//!
//! [`ScheduleArchive`] keeps snapshots in a directory, one file per
//! schedule, named `<prefix><start>-<end>.<ext>`. File names are for
//! display only and are never parsed back.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::LunchConfig;
use crate::error::{LunchError, Result};
use crate::models::LunchSchedule;

/// Serializes a schedule to pretty-printed JSON.
///
/// # Errors
/// [`LunchError::ScheduleEncodeFailed`] if serialization fails.
pub fn encode_schedule(schedule: &LunchSchedule) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(schedule).map_err(encode_error)
}

fn encode_error(err: serde_json::Error) -> LunchError {
    LunchError::ScheduleEncodeFailed {
        reason: err.to_string(),
    }
}

/// Parses a schedule snapshot.
///
/// # Errors
/// [`LunchError::ScheduleDecodeFailed`] if the bytes are not a valid snapshot.
pub fn decode_schedule(bytes: &[u8]) -> Result<LunchSchedule> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Archive file name for `schedule`, e.g. `OldLunch_22-03-2021-01-04-2021.json`.
pub fn archive_file_name(schedule: &LunchSchedule, config: &LunchConfig) -> String {
    format!(
        "{}{}-{}.{}",
        config.file_prefix,
        config.format_date(schedule.start_date),
        config.format_date(schedule.end_date),
        config.file_extension
    )
}

/// A saved schedule found in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedSchedule {
    /// File name, shown to users and used to load the schedule.
    pub display_name: String,
    /// Full path.
    pub path: PathBuf,
}

/// A directory of saved schedules.
#[derive(Debug, Clone)]
pub struct ScheduleArchive {
    dir: PathBuf,
    config: LunchConfig,
}

impl ScheduleArchive {
    /// Opens an archive rooted at `dir` with default naming.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_config(dir, LunchConfig::default())
    }

    /// Opens an archive with the given naming settings.
    pub fn with_config(dir: impl Into<PathBuf>, config: LunchConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    /// Archive directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `schedule` to the archive, creating the directory if needed.
    ///
    /// A schedule with the same date range overwrites the earlier file.
    pub fn save(&self, schedule: &LunchSchedule) -> Result<ArchivedSchedule> {
        std::fs::create_dir_all(&self.dir).map_err(|e| LunchError::storage(&self.dir, &e))?;
        let display_name = archive_file_name(schedule, &self.config);
        let path = self.dir.join(&display_name);
        let bytes = encode_schedule(schedule)?;
        std::fs::write(&path, bytes).map_err(|e| LunchError::storage(&path, &e))?;
        info!(id = %schedule.id, file = %display_name, "saved lunch schedule");
        Ok(ArchivedSchedule { display_name, path })
    }

    /// Lists saved schedules, sorted by file name.
    ///
    /// A missing directory is an empty archive.
    pub fn list(&self) -> Result<Vec<ArchivedSchedule>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LunchError::storage(&self.dir, &e)),
        };

        let suffix = format!(".{}", self.config.file_extension);
        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| LunchError::storage(&self.dir, &e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with(&self.config.file_prefix) && name.ends_with(&suffix) {
                found.push(ArchivedSchedule {
                    display_name: name.to_string(),
                    path: path.clone(),
                });
            }
        }
        found.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        debug!(dir = %self.dir.display(), count = found.len(), "listed archive");
        Ok(found)
    }

    /// Loads a saved schedule by display name.
    ///
    /// # Errors
    /// - [`LunchError::SelectedScheduleNotFound`] if no such file exists
    /// - [`LunchError::ScheduleDecodeFailed`] if the file is not a snapshot
    pub fn load(&self, display_name: &str) -> Result<LunchSchedule> {
        let bytes = self.read(display_name)?;
        decode_schedule(&bytes)
    }

    /// Reads the raw snapshot bytes of a saved schedule.
    pub fn read(&self, display_name: &str) -> Result<Vec<u8>> {
        let path = self.entry_path(display_name)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(not_found(display_name))
            }
            Err(e) => Err(LunchError::storage(&path, &e)),
        }
    }

    /// Deletes a saved schedule.
    pub fn remove(&self, display_name: &str) -> Result<()> {
        let path = self.entry_path(display_name)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                info!(file = %display_name, "removed saved lunch schedule");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(not_found(display_name))
            }
            Err(e) => Err(LunchError::storage(&path, &e)),
        }
    }

    /// Path of an archive entry. Names with a directory component are
    /// never archive entries.
    fn entry_path(&self, display_name: &str) -> Result<PathBuf> {
        if Path::new(display_name).file_name().and_then(|n| n.to_str()) != Some(display_name) {
            return Err(not_found(display_name));
        }
        Ok(self.dir.join(display_name))
    }
}

fn not_found(display_name: &str) -> LunchError {
    LunchError::SelectedScheduleNotFound {
        name: display_name.to_string(),
    }
}
