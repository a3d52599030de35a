//! Roster sources.
//!
//! The roster is supplied by an external collaborator: an HTTP endpoint,
//! a local file, or the built-in placeholder list. This module defines the
//! seam ([`RosterSource`]) and the decoding rules. Network access itself is
//! left to implementors of the trait.
//!
//! # Format
//! A JSON array of objects with at least a `name` field. Other fields are
//! ignored, so user listings such as `[{"id": 1, "name": "...", "email": ...}]`
//! decode directly.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{LunchError, Result};
use crate::models::Employee;
use crate::validation::ensure_valid_roster;

/// Names used when no real roster is available.
const PLACEHOLDER_NAMES: [&str; 10] = [
    "Ivana", "Tim", "Jasmin", "Nicol", "Mark", "Max", "Jan", "Valerie", "Nina", "Felix",
];

/// Something that can produce a roster.
pub trait RosterSource {
    /// Fetches the current roster.
    ///
    /// # Errors
    /// [`LunchError::BadRosterSource`] if the roster cannot be obtained or
    /// is malformed.
    fn fetch(&self) -> Result<Vec<Employee>>;
}

/// A fixed, in-memory roster.
#[derive(Debug, Clone, Default)]
pub struct StaticRoster {
    employees: Vec<Employee>,
}

impl StaticRoster {
    /// Wraps a roster.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// The built-in ten-name placeholder roster.
    pub fn placeholder() -> Self {
        Self::new(placeholder_employees())
    }
}

impl RosterSource for StaticRoster {
    fn fetch(&self) -> Result<Vec<Employee>> {
        ensure_valid_roster(&self.employees)?;
        Ok(self.employees.clone())
    }
}

/// A roster read from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRoster {
    path: PathBuf,
}

impl JsonFileRoster {
    /// Reads from `path` on every fetch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for JsonFileRoster {
    fn fetch(&self) -> Result<Vec<Employee>> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "roster file unreadable");
            LunchError::bad_roster(format!("{}: {e}", self.path.display()))
        })?;
        parse_roster(&bytes)
    }
}

/// Decodes and validates a JSON roster.
///
/// # Errors
/// [`LunchError::BadRosterSource`] for malformed JSON, blank names, or
/// duplicate names.
///
/// ```
/// use lunch_schedule::roster::parse_roster;
///
/// let roster = parse_roster(br#"[{"id": 1, "name": "Ivana"}, {"id": 2, "name": "Tim"}]"#).unwrap();
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster[0].name, "Ivana");
/// ```
pub fn parse_roster(bytes: &[u8]) -> Result<Vec<Employee>> {
    let employees: Vec<Employee> =
        serde_json::from_slice(bytes).map_err(|e| LunchError::bad_roster(e.to_string()))?;
    ensure_valid_roster(&employees)?;
    debug!(count = employees.len(), "decoded roster");
    Ok(employees)
}

/// The built-in placeholder roster.
pub fn placeholder_employees() -> Vec<Employee> {
    Employee::roster(PLACEHOLDER_NAMES)
}

/// Fetches from `source`, substituting the placeholder roster on failure.
///
/// Returns the roster and, if the source failed, the error that caused
/// the substitution.
pub fn fetch_or_placeholder(source: &dyn RosterSource) -> (Vec<Employee>, Option<LunchError>) {
    match source.fetch() {
        Ok(employees) => (employees, None),
        Err(err) => {
            warn!(error = %err, "roster source failed, using placeholder roster");
            (placeholder_employees(), Some(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_placeholder_roster() {
        let roster = placeholder_employees();
        assert_eq!(roster.len(), 10);
        assert!(ensure_valid_roster(&roster).is_ok());
        assert_eq!(roster[0].name, "Ivana");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let json = br#"[
            {"id": 1, "name": "Leanne Graham", "username": "Bret"},
            {"id": 2, "name": "Ervin Howell", "address": {"city": "Wisokyburgh"}}
        ]"#;
        let roster = parse_roster(json).unwrap();
        assert_eq!(
            roster,
            Employee::roster(["Leanne Graham", "Ervin Howell"])
        );
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_roster(b"not json").unwrap_err();
        assert!(matches!(err, LunchError::BadRosterSource { .. }));

        let err = parse_roster(br#"[{"id": 1}]"#).unwrap_err();
        assert!(matches!(err, LunchError::BadRosterSource { .. }));
    }

    #[test]
    fn test_parse_duplicate_names() {
        let err = parse_roster(br#"[{"name": "Tim"}, {"name": "Tim"}]"#).unwrap_err();
        match err {
            LunchError::BadRosterSource { reason } => assert!(reason.contains("Tim")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_json_file_roster() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"name": "Nina"}, {"name": "Felix"}]"#)
            .unwrap();
        let source = JsonFileRoster::new(file.path());
        assert_eq!(source.fetch().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_is_bad_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileRoster::new(dir.path().join("missing.json"));
        assert!(matches!(
            source.fetch(),
            Err(LunchError::BadRosterSource { .. })
        ));
    }

    #[test]
    fn test_fetch_or_placeholder() {
        let bad = StaticRoster::new(Employee::roster(["Max", "Max"]));
        let (roster, err) = fetch_or_placeholder(&bad);
        assert_eq!(roster, placeholder_employees());
        assert!(err.is_some());

        let good = StaticRoster::new(Employee::roster(["Max", "Jan"]));
        let (roster, err) = fetch_or_placeholder(&good);
        assert_eq!(roster.len(), 2);
        assert!(err.is_none());
    }
}
