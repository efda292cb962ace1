//! Schedule quality metrics.
//!
//! Computes day-level indicators from one placement outcome and the owner
//! it was produced for.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled minutes | Sum of placed durations |
//! | Idle minutes | Available minus scheduled |
//! | Utilization | Scheduled / available |
//! | High skipped | High-priority tasks that did not fit |
//! | Feasible | No high-priority task skipped |

use serde::Serialize;
use std::fmt;

use crate::models::{Owner, Priority, ScheduleOutcome};

/// Day-level schedule indicators. All times in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSummary {
    /// Number of placed entries.
    pub scheduled_count: usize,
    /// Number of skipped tasks.
    pub skipped_count: usize,
    /// Minutes occupied by placed entries.
    pub scheduled_minutes: u64,
    /// Minutes in the owner's availability window.
    pub available_minutes: u64,
    /// Unused minutes in the window.
    pub idle_minutes: u64,
    /// Fraction of the window in use (0.0..=1.0).
    pub utilization: f64,
    /// High-priority tasks that were skipped.
    pub high_priority_skipped: usize,
    /// Whether every high-priority task was placed.
    pub feasible: bool,
}

impl ScheduleSummary {
    /// Computes indicators for `outcome` against `owner`'s window.
    pub fn calculate(owner: &Owner, outcome: &ScheduleOutcome<'_>) -> Self {
        let available = u64::from(owner.total_available_minutes());
        let scheduled = outcome.scheduled_minutes();
        let high_priority_skipped = outcome
            .skipped
            .iter()
            .filter(|t| t.priority == Priority::High)
            .count();

        // Owner construction guarantees a non-empty window.
        let utilization = if available == 0 {
            0.0
        } else {
            scheduled as f64 / available as f64
        };

        Self {
            scheduled_count: outcome.scheduled.len(),
            skipped_count: outcome.skipped.len(),
            scheduled_minutes: scheduled,
            available_minutes: available,
            idle_minutes: available.saturating_sub(scheduled),
            utilization,
            high_priority_skipped,
            feasible: high_priority_skipped == 0,
        }
    }

    /// Whether the day is feasible and at least `min_utilization` busy.
    pub fn meets_thresholds(&self, min_utilization: f64) -> bool {
        self.feasible && self.utilization >= min_utilization
    }
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scheduled {} task(s), {} of {} min used ({:.0}%), {} skipped",
            self.scheduled_count,
            self.scheduled_minutes,
            self.available_minutes,
            self.utilization * 100.0,
            self.skipped_count
        )?;
        if !self.feasible {
            write!(
                f,
                "; WARNING: {} high-priority task(s) did not fit",
                self.high_priority_skipped
            )?;
        }
        Ok(())
    }
}
