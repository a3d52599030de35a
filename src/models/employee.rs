//! Employee model.
//!
//! Employees are identified by name; a roster never contains the same
//! name twice (see [`crate::validation::validate_roster`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person eligible for lunch pairing.
///
/// Only `name` is kept. Roster sources may carry additional fields
/// (ids, e-mail addresses); they are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Employee {
    /// Display name, unique within a roster.
    pub name: String,
}

impl Employee {
    /// Creates an employee with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Builds a roster from a list of names.
    pub fn roster<I, S>(names: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Self::new).collect()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Employee {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
