//! Scheduler configuration.
//!
//! [`SchedulerConfig::default()`] gives the standard pass: priority order,
//! completed tasks included, placement starting at the owner's first
//! available minute.

use serde::{Deserialize, Serialize};

use crate::error::{PawError, Result};
use crate::models::Owner;

/// Ordering key for task lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Priority descending (high first). Ties keep input order.
    #[default]
    Priority,
    /// Shortest first. Ties keep input order.
    DurationAscending,
    /// Longest first. Ties keep input order.
    DurationDescending,
}

/// Configuration for a [`Scheduler`](crate::scheduler::Scheduler).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Order in which tasks are offered to the placement cursor.
    pub placement_order: SortKey,
    /// Leave completed tasks out of the pass.
    pub skip_completed: bool,
    /// Minutes after availability start where the cursor begins.
    pub start_offset_minutes: u32,
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placement order.
    pub fn with_placement_order(mut self, key: SortKey) -> Self {
        self.placement_order = key;
        self
    }

    /// Sets whether completed tasks are skipped.
    pub fn with_skip_completed(mut self, skip: bool) -> Self {
        self.skip_completed = skip;
        self
    }

    /// Sets the cursor offset from availability start.
    pub fn with_start_offset(mut self, minutes: u32) -> Self {
        self.start_offset_minutes = minutes;
        self
    }

    /// Validates this configuration against an owner's window.
    ///
    /// Checks:
    /// - `start_offset_minutes` must be inside the availability window
    pub fn validate(&self, owner: &Owner) -> Result<()> {
        let available = owner.total_available_minutes();
        if self.start_offset_minutes >= available {
            return Err(PawError::Config(format!(
                "start_offset_minutes ({}) must be less than the {available} available minutes",
                self.start_offset_minutes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_priority_pass() {
        let config = SchedulerConfig::default();
        assert_eq!(config.placement_order, SortKey::Priority);
        assert!(!config.skip_completed);
        assert_eq!(config.start_offset_minutes, 0);
    }

    #[test]
    fn test_builders_set_fields() {
        let config = SchedulerConfig::new()
            .with_placement_order(SortKey::DurationAscending)
            .with_skip_completed(true)
            .with_start_offset(15);
        assert_eq!(config.placement_order, SortKey::DurationAscending);
        assert!(config.skip_completed);
        assert_eq!(config.start_offset_minutes, 15);
    }

    #[test]
    fn test_offset_inside_window_passes() {
        let owner = Owner::new("Alice", 9, 10).unwrap();
        assert!(SchedulerConfig::new().with_start_offset(59).validate(&owner).is_ok());
    }

    #[test]
    fn test_offset_past_window_rejected() {
        let owner = Owner::new("Alice", 9, 10).unwrap();
        let err = SchedulerConfig::new()
            .with_start_offset(60)
            .validate(&owner)
            .unwrap_err();
        assert!(matches!(err, PawError::Config(_)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SchedulerConfig =
            serde_json::from_str(r#"{"placement_order":"duration-descending"}"#).unwrap();
        assert_eq!(config.placement_order, SortKey::DurationDescending);
        assert!(!config.skip_completed);
    }
}
