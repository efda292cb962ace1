//! Input validation for pet care scheduling.
//!
//! Two layers:
//! - Field checks run by the constructors of [`Task`](crate::models::Task) and
//!   [`Owner`](crate::models::Owner). These fail fast with a [`PawError`].
//! - [`validate_owner`] inspects a fully assembled owner and reports every
//!   advisory problem at once. Scheduling never requires it to pass.

use std::collections::HashSet;

use crate::error::{PawError, Result};
use crate::models::Owner;

/// Highest valid availability hour.
pub const MAX_HOUR: u8 = 23;

/// Validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// An advisory validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two pets share the same name, so name lookups only reach the first.
    DuplicatePetName,
    /// A pet has an empty name.
    EmptyPetName,
    /// A task has an empty name.
    EmptyTaskName,
    /// A single task is longer than the whole availability window.
    TaskExceedsWindow,
    /// Daily task minutes exceed the available minutes.
    Overbooked,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Rejects empty or whitespace-only names.
pub(crate) fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PawError::EmptyName);
    }
    Ok(())
}

/// Converts a signed minute count into a duration, rejecting negatives.
pub(crate) fn check_duration(minutes: i64) -> Result<u32> {
    if minutes < 0 {
        return Err(PawError::NegativeDuration(minutes));
    }
    u32::try_from(minutes).map_err(|_| PawError::DurationOutOfRange(minutes))
}

/// Checks an availability window: both hours in 0..=23 and start < end.
pub(crate) fn check_hours(start: u8, end: u8) -> Result<()> {
    for hour in [start, end] {
        if hour > MAX_HOUR {
            return Err(PawError::HourOutOfRange(hour));
        }
    }
    if start >= end {
        return Err(PawError::InvalidAvailability { start, end });
    }
    Ok(())
}

/// Validates an assembled owner.
///
/// Checks:
/// 1. No two pets share a name
/// 2. No pet or task has an empty name
/// 3. No daily task is longer than the availability window
/// 4. Total daily task minutes fit the availability window
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_owner(owner: &Owner) -> ValidationResult {
    let mut errors = Vec::new();
    let available = owner.total_available_minutes();

    let mut names = HashSet::new();
    for pet in &owner.pets {
        if pet.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPetName,
                "Pet with empty name",
            ));
        } else if !names.insert(pet.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePetName,
                format!("Duplicate pet name: {}", pet.name),
            ));
        }

        for task in &pet.tasks {
            if task.name.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyTaskName,
                    format!("Task with empty name for '{}'", pet.name),
                ));
            }
        }

        for task in pet.daily_tasks() {
            if task.duration_minutes > available {
                errors.push(ValidationError::new(
                    ValidationErrorKind::TaskExceedsWindow,
                    format!(
                        "Task '{}' for '{}' needs {} min but only {} min are available",
                        task.name, pet.name, task.duration_minutes, available
                    ),
                ));
            }
        }
    }

    let required = owner.total_daily_task_minutes();
    if required > u64::from(available) {
        errors.push(ValidationError::new(
            ValidationErrorKind::Overbooked,
            format!("Daily tasks need {required} min but only {available} min are available"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
