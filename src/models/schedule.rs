//! Schedule (solution) model.
//!
//! A [`ScheduledTask`] binds a borrowed [`Task`] to a start minute. The borrow
//! is shared, so nothing reached through a schedule can mutate the task it
//! came from. A [`ScheduleOutcome`] is the result of one placement pass: the
//! placed entries plus the tasks that did not fit.
//!
//! # Time Representation
//! All times are minutes since midnight. Intervals are half-open
//! `[start, end)`: back-to-back entries do not overlap.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use super::{Priority, Task};

/// Formats minutes since midnight as `HH:MM`.
pub fn format_minute(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// A task placed at a concrete start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledTask<'a> {
    /// Originating task (read-only).
    pub task: &'a Task,
    /// Start time (minutes since midnight).
    pub start_minute: u32,
    /// Duration copied from the task at scheduling time.
    pub duration_minutes: u32,
}

impl<'a> ScheduledTask<'a> {
    /// Places `task` at `start_minute` using its current duration.
    pub fn new(task: &'a Task, start_minute: u32) -> Self {
        Self::with_duration(task, start_minute, task.duration_minutes)
    }

    /// Places `task` at `start_minute` with an explicit duration.
    pub fn with_duration(task: &'a Task, start_minute: u32, duration_minutes: u32) -> Self {
        Self {
            task,
            start_minute,
            duration_minutes,
        }
    }

    /// `start_minute + duration_minutes`, saturating at `u32::MAX`.
    #[inline]
    pub fn end_minute(&self) -> u32 {
        self.start_minute.saturating_add(self.duration_minutes)
    }

    /// Whether the two half-open intervals intersect.
    ///
    /// Zero-duration entries never overlap anything.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.duration_minutes == 0 || other.duration_minutes == 0 {
            return false;
        }
        self.start_minute < other.end_minute() && other.start_minute < self.end_minute()
    }

    /// Schedule order: start minute ascending, then end minute.
    ///
    /// Use with `sort_by` (a stable sort) to order a manually assembled schedule.
    pub fn cmp_by_start(&self, other: &Self) -> Ordering {
        self.start_minute
            .cmp(&other.start_minute)
            .then_with(|| self.end_minute().cmp(&other.end_minute()))
    }

    /// Name of the originating task.
    #[inline]
    pub fn name(&self) -> &'a str {
        &self.task.name
    }
}

impl fmt::Display for ScheduledTask<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {} ({} min, {} priority)",
            format_minute(self.start_minute),
            format_minute(self.end_minute()),
            self.task.name,
            self.duration_minutes,
            self.task.priority
        )
    }
}

/// Two scheduled entries whose intervals overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conflict<'a> {
    /// Earlier entry in schedule order.
    pub first: ScheduledTask<'a>,
    /// Later entry in schedule order.
    pub second: ScheduledTask<'a>,
}

impl<'a> Conflict<'a> {
    /// Task names of both sides.
    pub fn names(&self) -> (&'a str, &'a str) {
        (self.first.name(), self.second.name())
    }

    /// Minutes shared by both intervals.
    pub fn overlap_minutes(&self) -> u32 {
        let start = self.first.start_minute.max(self.second.start_minute);
        let end = self.first.end_minute().min(self.second.end_minute());
        end.saturating_sub(start)
    }
}

impl fmt::Display for Conflict<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CONFLICT DETECTED: '{}' ({}-{}) overlaps '{}' ({}-{}) by {} min",
            self.first.name(),
            format_minute(self.first.start_minute),
            format_minute(self.first.end_minute()),
            self.second.name(),
            format_minute(self.second.start_minute),
            format_minute(self.second.end_minute()),
            self.overlap_minutes()
        )
    }
}

/// Result of one placement pass.
///
/// `scheduled` is in placement order, which is also start-time order.
/// `skipped` lists the tasks that did not fit, in the order they were tried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleOutcome<'a> {
    /// Placed entries.
    pub scheduled: Vec<ScheduledTask<'a>>,
    /// Tasks left out for lack of time.
    pub skipped: Vec<&'a Task>,
}

impl<'a> ScheduleOutcome<'a> {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every task was placed.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Whether any high-priority task was skipped.
    pub fn skipped_high_priority(&self) -> bool {
        self.skipped.iter().any(|t| t.priority == Priority::High)
    }

    /// Sum of placed durations (minutes).
    pub fn scheduled_minutes(&self) -> u64 {
        self.scheduled
            .iter()
            .map(|s| u64::from(s.duration_minutes))
            .sum()
    }

    /// Latest end minute across placed entries.
    pub fn last_end_minute(&self) -> Option<u32> {
        self.scheduled.iter().map(ScheduledTask::end_minute).max()
    }

    /// Finds the first placed entry for a task name.
    pub fn entry_for(&self, name: &str) -> Option<&ScheduledTask<'a>> {
        self.scheduled.iter().find(|s| s.task.name == name)
    }

    /// Number of placed entries.
    pub fn len(&self) -> usize {
        self.scheduled.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }
}
