//! Roster validation.
//!
//! Checks a roster before scheduling. Detects:
//! - Rosters too small to pair (fewer than two employees)
//! - Odd rosters larger than two (someone would eat alone)
//! - Duplicate names (names are the employee identity)
//! - Blank names

use std::collections::HashSet;

use crate::error::{LunchError, Result};
use crate::models::Employee;

/// Validation result for roster content checks.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// A roster content problem.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of roster content problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share the same name.
    DuplicateName,
    /// An employee has an empty or whitespace-only name.
    BlankName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks that a roster of `count` employees can be paired.
///
/// Exactly two employees form a single team. Any other count must be
/// even and at least four.
///
/// # Errors
/// - [`LunchError::NotEnoughEmployees`] when `count < 2`
/// - [`LunchError::OddNumberOfEmployees`] when `count` is odd and `> 2`
pub fn check_roster_size(count: usize) -> Result<()> {
    if count < 2 {
        return Err(LunchError::NotEnoughEmployees { count });
    }
    if count % 2 != 0 {
        return Err(LunchError::OddNumberOfEmployees { count });
    }
    Ok(())
}

/// Validates roster content.
///
/// Checks:
/// 1. No blank names
/// 2. No duplicate names
///
/// Size is not checked here; see [`check_roster_size`].
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(employees: &[Employee]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (idx, e) in employees.iter().enumerate() {
        if e.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                format!("Employee at position {idx} has a blank name"),
            ));
            continue;
        }
        if !seen.insert(e.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate employee name: {}", e.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates roster content, folding all issues into one
/// [`LunchError::BadRosterSource`].
pub fn ensure_valid_roster(employees: &[Employee]) -> Result<()> {
    validate_roster(employees).map_err(|errors| {
        let reason = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        LunchError::bad_roster(reason)
    })
}
