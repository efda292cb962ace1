//! Priority-driven greedy day planner.
//!
//! # Algorithm
//!
//! 1. Collect the owner's daily tasks (pet order, then task order).
//! 2. Stable-sort by priority descending.
//! 3. Walk the sorted list with a cursor starting at the availability start.
//! 4. Place a task at the cursor if it ends by the availability end and
//!    advance the cursor; otherwise record it as skipped and leave the
//!    cursor where it is.
//!
//! A placed task is never evicted for a later one and tasks are never
//! split. Because the cursor only moves forward, generated schedules are
//! conflict-free; [`Scheduler::detect_conflicts`] checks any schedule,
//! including hand-assembled ones.
//!
//! # Complexity
//! O(n log n) placement, O(n²) conflict detection, n = tasks in the day.

use std::cmp::Reverse;

use crate::config::{SchedulerConfig, SortKey};
use crate::error::Result;
use crate::models::{
    format_minute, Conflict, Owner, Priority, ScheduleOutcome, ScheduledTask, Task,
};

use super::ScheduleSummary;

/// Greedy single-day scheduler over one owner.
///
/// Holds a shared borrow of the owner for its whole lifetime; nothing here
/// mutates owners, pets, or tasks.
///
/// # Example
///
/// ```
/// use pawpal_schedule::models::{Frequency, Owner, Pet, Priority, Task};
/// use pawpal_schedule::scheduler::Scheduler;
///
/// let mut owner = Owner::new("Alice", 9, 17).unwrap();
/// let mut buddy = Pet::new("Buddy", "Dog");
/// buddy.add_task(Task::new("Walk", "", Priority::High, Frequency::Daily, 30).unwrap());
/// owner.add_pet(buddy);
///
/// let scheduler = Scheduler::new(&owner);
/// let outcome = scheduler.generate_schedule();
/// assert_eq!(outcome.scheduled.len(), 1);
/// assert_eq!(outcome.scheduled[0].start_minute, 9 * 60);
/// assert!(scheduler.is_schedule_feasible());
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler<'a> {
    owner: &'a Owner,
    config: SchedulerConfig,
}

impl<'a> Scheduler<'a> {
    /// Creates a scheduler with the default configuration.
    pub fn new(owner: &'a Owner) -> Self {
        Self {
            owner,
            config: SchedulerConfig::default(),
        }
    }

    /// Creates a scheduler with a custom configuration.
    ///
    /// # Errors
    /// [`PawError::Config`](crate::PawError::Config) if the configuration does
    /// not fit the owner's window.
    pub fn with_config(owner: &'a Owner, config: SchedulerConfig) -> Result<Self> {
        config.validate(owner)?;
        Ok(Self { owner, config })
    }

    /// The owner being scheduled.
    pub fn owner(&self) -> &'a Owner {
        self.owner
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Returns `tasks` ordered by `key`. The sort is stable.
    pub fn sort_tasks<'t>(&self, tasks: &[&'t Task], key: SortKey) -> Vec<&'t Task> {
        let mut sorted = tasks.to_vec();
        match key {
            SortKey::Priority => sorted.sort_by_key(|t| Reverse(t.priority)),
            SortKey::DurationAscending => sorted.sort_by_key(|t| t.duration_minutes),
            SortKey::DurationDescending => sorted.sort_by_key(|t| Reverse(t.duration_minutes)),
        }
        sorted
    }

    /// High → low, ties in input order.
    pub fn sort_tasks_by_priority<'t>(&self, tasks: &[&'t Task]) -> Vec<&'t Task> {
        self.sort_tasks(tasks, SortKey::Priority)
    }

    /// By duration, shortest first when `ascending`. Ties in input order.
    pub fn sort_tasks_by_duration<'t>(&self, tasks: &[&'t Task], ascending: bool) -> Vec<&'t Task> {
        let key = if ascending {
            SortKey::DurationAscending
        } else {
            SortKey::DurationDescending
        };
        self.sort_tasks(tasks, key)
    }

    /// Tasks with the given priority, order preserved.
    pub fn filter_tasks_by_priority<'t>(&self, tasks: &[&'t Task], level: Priority) -> Vec<&'t Task> {
        tasks
            .iter()
            .copied()
            .filter(|t| t.priority == level)
            .collect()
    }

    /// Tasks with the given completion status, order preserved.
    pub fn filter_tasks_by_status<'t>(&self, tasks: &[&'t Task], completed: bool) -> Vec<&'t Task> {
        tasks
            .iter()
            .copied()
            .filter(|t| t.is_completed() == completed)
            .collect()
    }

    /// Plans the owner's day.
    ///
    /// Returns a fresh outcome on every call.
    pub fn generate_schedule(&self) -> ScheduleOutcome<'a> {
        let candidates: Vec<&'a Task> = self
            .owner
            .daily_tasks()
            .into_iter()
            .filter(|t| !(self.config.skip_completed && t.is_completed()))
            .collect();
        self.schedule_tasks(&candidates)
    }

    /// Runs the greedy placement over an explicit task list.
    ///
    /// Useful with [`Pet::expanded_daily_tasks`](crate::models::Pet::expanded_daily_tasks)
    /// when every occurrence of a multi-daily task needs a slot.
    pub fn schedule_tasks(&self, tasks: &[&'a Task]) -> ScheduleOutcome<'a> {
        let ordered = self.sort_tasks(tasks, self.config.placement_order);
        let end = self.owner.availability_end_minute();
        let mut cursor = self.owner.availability_start_minute() + self.config.start_offset_minutes;
        let mut outcome = ScheduleOutcome::new();

        for task in ordered {
            let finish = u64::from(cursor) + u64::from(task.duration_minutes);
            if finish <= u64::from(end) {
                tracing::debug!(
                    task = %task.name,
                    start = %format_minute(cursor),
                    minutes = task.duration_minutes,
                    "placed task"
                );
                outcome.scheduled.push(ScheduledTask::new(task, cursor));
                cursor += task.duration_minutes;
            } else {
                tracing::debug!(
                    task = %task.name,
                    needed = task.duration_minutes,
                    remaining = end - cursor,
                    "task does not fit, skipped"
                );
                outcome.skipped.push(task);
            }
        }

        tracing::info!(
            owner = %self.owner.name,
            placed = outcome.scheduled.len(),
            skipped = outcome.skipped.len(),
            "schedule generated"
        );
        if outcome.skipped_high_priority() {
            tracing::warn!(owner = %self.owner.name, "high-priority task did not fit the day");
        }
        outcome
    }

    /// All overlapping pairs in `schedule`, checked pairwise.
    ///
    /// Pairs are reported as `(i, j)` with `i < j` in input order.
    pub fn detect_conflicts<'s>(&self, schedule: &[ScheduledTask<'s>]) -> Vec<Conflict<'s>> {
        let mut conflicts = Vec::new();
        for (i, first) in schedule.iter().enumerate() {
            for second in &schedule[i + 1..] {
                if first.overlaps(second) {
                    conflicts.push(Conflict {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        if !conflicts.is_empty() {
            tracing::warn!(count = conflicts.len(), "schedule conflicts detected");
        }
        conflicts
    }

    /// Whether every high-priority daily task fits in a generated schedule.
    pub fn is_schedule_feasible(&self) -> bool {
        !self.generate_schedule().skipped_high_priority()
    }

    /// Whether `task` can start at `start_minute` without leaving the
    /// availability window or overlapping an entry of `schedule`.
    pub fn can_fit_task(&self, task: &Task, start_minute: u32, schedule: &[ScheduledTask<'_>]) -> bool {
        let finish = u64::from(start_minute) + u64::from(task.duration_minutes);
        if start_minute < self.owner.availability_start_minute()
            || finish > u64::from(self.owner.availability_end_minute())
        {
            return false;
        }
        let candidate = ScheduledTask::new(task, start_minute);
        !schedule.iter().any(|entry| entry.overlaps(&candidate))
    }

    /// Metrics for a freshly generated schedule.
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::calculate(self.owner, &self.generate_schedule())
    }

    /// Human-readable plan for the day, skipped tasks included.
    pub fn schedule_summary(&self) -> String {
        let outcome = self.generate_schedule();
        let metrics = ScheduleSummary::calculate(self.owner, &outcome);

        let mut lines = vec![format!(
            "Schedule for {} ({}-{})",
            self.owner.name,
            format_minute(self.owner.availability_start_minute()),
            format_minute(self.owner.availability_end_minute())
        )];
        if outcome.is_empty() {
            lines.push("  No tasks scheduled.".to_string());
        }
        for entry in &outcome.scheduled {
            lines.push(format!("  {entry}"));
        }
        for task in &outcome.skipped {
            lines.push(format!(
                "  Skipped: {} ({} min, {} priority)",
                task.name, task.duration_minutes, task.priority
            ));
        }
        lines.push(metrics.to_string());
        lines.join("\n")
    }

    /// Human-readable conflict report for `schedule`.
    pub fn conflicts_summary(&self, schedule: &[ScheduledTask<'_>]) -> String {
        let conflicts = self.detect_conflicts(schedule);
        if conflicts.is_empty() {
            return "No scheduling conflicts detected.".to_string();
        }
        conflicts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
