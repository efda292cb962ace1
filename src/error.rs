//! Error types for pawpal-schedule.
//!
//! Only construction can fail. Lookups report absence through `Option` or an
//! empty `Vec`, and a task that does not fit the day is reported by the
//! scheduler's outcome rather than as an error.

/// Errors raised while constructing domain values or scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PawError {
    /// A task or owner was given an empty (or whitespace-only) name.
    #[error("name must not be empty")]
    EmptyName,

    /// Priority string is not one of `high`, `medium`, `low`.
    #[error("unknown priority: {0:?}")]
    InvalidPriority(String),

    /// Frequency string is not a recognized frequency.
    #[error("unknown frequency: {0:?}")]
    InvalidFrequency(String),

    /// Task duration below zero minutes.
    #[error("duration must be non-negative, got {0} minutes")]
    NegativeDuration(i64),

    /// Task duration too large to represent in minutes.
    #[error("duration of {0} minutes is out of range")]
    DurationOutOfRange(i64),

    /// Availability hour outside 0..=23.
    #[error("hour must be within 0..=23, got {0}")]
    HourOutOfRange(u8),

    /// Availability start is not strictly before its end.
    #[error("availability start ({start}h) must be before end ({end}h)")]
    InvalidAvailability {
        /// Requested start hour.
        start: u8,
        /// Requested end hour.
        end: u8,
    },

    /// Scheduler configuration does not fit the owner it is applied to.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, PawError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_priority() {
        let err = PawError::InvalidPriority("urgent".into());
        assert_eq!(err.to_string(), "unknown priority: \"urgent\"");
    }

    #[test]
    fn test_display_negative_duration() {
        let err = PawError::NegativeDuration(-5);
        assert_eq!(
            err.to_string(),
            "duration must be non-negative, got -5 minutes"
        );
    }

    #[test]
    fn test_display_invalid_availability() {
        let err = PawError::InvalidAvailability { start: 17, end: 9 };
        assert_eq!(
            err.to_string(),
            "availability start (17h) must be before end (9h)"
        );
    }
}
