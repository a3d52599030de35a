//! Runtime configuration.
//!
//! Settings are passed explicitly to the scheduler, archive, and store;
//! nothing is read from global state. All fields have defaults, so an
//! empty TOML document is a valid configuration.
//!
//! ```toml
//! date_format = "%d-%m-%Y"
//! file_prefix = "OldLunch_"
//! file_extension = "json"
//! none_filter = "None"
//! weekend = ["Sat", "Sun"]
//! seed = 7
//! ```

use std::fmt::Write as _;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{LunchError, Result};
use crate::models::Calendar;
use crate::scheduler::RoundRobinScheduler;

/// Lunch scheduling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LunchConfig {
    /// strftime pattern for dates in archive file names and labels.
    pub date_format: String,
    /// File name prefix for archived schedules.
    pub file_prefix: String,
    /// File extension (without dot) for archived schedules.
    pub file_extension: String,
    /// Filter label meaning "no filter".
    pub none_filter: String,
    /// Days on which no lunch is scheduled.
    pub weekend: Vec<Weekday>,
    /// Fixed shuffle seed. `None` = fresh randomness per schedule.
    pub seed: Option<u64>,
}

impl Default for LunchConfig {
    fn default() -> Self {
        Self {
            date_format: "%d-%m-%Y".to_string(),
            file_prefix: "OldLunch_".to_string(),
            file_extension: "json".to_string(),
            none_filter: "None".to_string(),
            weekend: vec![Weekday::Sat, Weekday::Sun],
            seed: None,
        }
    }
}

impl LunchConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// [`LunchError::InvalidConfig`] on parse errors or invalid values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| LunchError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LunchError::storage(path, &e))?;
        Self::from_toml_str(&text)
    }

    /// Checks field values.
    ///
    /// Rejects unparseable date formats, empty file extensions or filter
    /// labels, and weekends that cover the whole week.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(LunchError::InvalidConfig {
                reason: reason.to_string(),
            })
        };
        if self.date_format.is_empty()
            || StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error))
        {
            return invalid("date_format is not a valid strftime pattern");
        }
        if self.file_extension.trim().is_empty() {
            return invalid("file_extension must not be empty");
        }
        if self.none_filter.trim().is_empty() {
            return invalid("none_filter must not be empty");
        }
        if !self.calendar().has_working_days() {
            return invalid("weekend covers every day of the week");
        }
        Ok(())
    }

    /// Working-day calendar for these settings.
    pub fn calendar(&self) -> Calendar {
        Calendar::new().with_weekend(self.weekend.iter().copied())
    }

    /// Scheduler configured with this calendar and seed.
    pub fn scheduler(&self) -> RoundRobinScheduler {
        let scheduler = RoundRobinScheduler::new().with_calendar(self.calendar());
        match self.seed {
            Some(seed) => scheduler.with_seed(seed),
            None => scheduler,
        }
    }

    /// Formats `date` with `date_format`, falling back to ISO-8601 if the
    /// pattern cannot be rendered.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.to_string();
        }
        out
    }
}
