//! Care task model.
//!
//! A task is one atomic care activity (a walk, a feeding, a dose of meds)
//! with a priority, a frequency, and a duration in minutes. Tasks are owned
//! by a [`Pet`](super::Pet); the scheduler only ever reads them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PawError, Result};
use crate::validation::{check_duration, check_name};

/// Task priority.
///
/// Variants are declared low to high so the derived `Ord` gives
/// `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Nice to have.
    Low,
    /// Should happen today.
    Medium,
    /// Must happen today.
    High,
}

impl Priority {
    /// Numeric sort key: high=3, medium=2, low=1.
    #[inline]
    pub fn score(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PawError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(PawError::InvalidPriority(s.to_string())),
        }
    }
}

/// How often a task recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Frequency {
    /// Once a day.
    Daily,
    /// Twice a day.
    TwiceDaily,
    /// Three times a day.
    ThreeTimesDaily,
    /// Once a week.
    Weekly,
    /// Does not recur.
    #[serde(alias = "once")]
    OneTime,
}

impl Frequency {
    /// Whether completing a task of this frequency yields a next occurrence.
    #[inline]
    pub fn is_recurring(self) -> bool {
        !matches!(self, Frequency::OneTime)
    }

    /// How many times per day the task is wanted.
    ///
    /// The scheduler places each task once per pass; callers that want
    /// the full multiplicity expand it themselves (see
    /// [`Pet::expanded_daily_tasks`](super::Pet::expanded_daily_tasks)).
    pub fn times_per_day(self) -> u32 {
        match self {
            Frequency::Daily => 1,
            Frequency::TwiceDaily => 2,
            Frequency::ThreeTimesDaily => 3,
            Frequency::Weekly | Frequency::OneTime => 1,
        }
    }

    /// Kebab-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::TwiceDaily => "twice-daily",
            Frequency::ThreeTimesDaily => "three-times-daily",
            Frequency::Weekly => "weekly",
            Frequency::OneTime => "one-time",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = PawError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "twice-daily" => Ok(Frequency::TwiceDaily),
            "three-times-daily" => Ok(Frequency::ThreeTimesDaily),
            "weekly" => Ok(Frequency::Weekly),
            "one-time" | "once" => Ok(Frequency::OneTime),
            _ => Err(PawError::InvalidFrequency(s.to_string())),
        }
    }
}

/// A pet care task.
///
/// Equality is by value: two tasks are equal when every attribute matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    /// Task name (non-empty). Not unique.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Scheduling priority.
    pub priority: Priority,
    /// Recurrence.
    pub frequency: Frequency,
    /// Duration in minutes.
    pub duration_minutes: u32,
    completed: bool,
}

/// Unchecked wire form of a [`Task`]; validated on conversion.
#[derive(Deserialize)]
struct TaskRecord {
    name: String,
    #[serde(default)]
    description: String,
    priority: Priority,
    frequency: Frequency,
    duration_minutes: i64,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = PawError;

    fn try_from(record: TaskRecord) -> Result<Self> {
        Task::new(
            record.name,
            record.description,
            record.priority,
            record.frequency,
            record.duration_minutes,
        )
        .map(|task| task.with_completed(record.completed))
    }
}

impl Task {
    /// Creates a new, incomplete task.
    ///
    /// # Errors
    /// [`PawError::EmptyName`] for a blank name, [`PawError::NegativeDuration`]
    /// for a negative duration.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        frequency: Frequency,
        duration_minutes: i64,
    ) -> Result<Self> {
        let name = name.into();
        check_name(&name)?;
        let duration_minutes = check_duration(duration_minutes)?;
        Ok(Self {
            name,
            description: description.into(),
            priority,
            frequency,
            duration_minutes,
            completed: false,
        })
    }

    /// Creates a task from string priority and frequency labels.
    ///
    /// # Errors
    /// Everything [`Task::new`] rejects, plus [`PawError::InvalidPriority`]
    /// and [`PawError::InvalidFrequency`] for unrecognized labels.
    pub fn parse(
        name: impl Into<String>,
        description: impl Into<String>,
        priority: &str,
        frequency: &str,
        duration_minutes: i64,
    ) -> Result<Self> {
        Self::new(
            name,
            description,
            priority.parse()?,
            frequency.parse()?,
            duration_minutes,
        )
    }

    /// Sets the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Whether the task has been completed.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the task complete.
    ///
    /// Returns the next occurrence for recurring tasks: a copy with
    /// `completed == false`. Returns `None` for one-time tasks. The caller
    /// decides where, if anywhere, the next occurrence goes.
    pub fn mark_complete(&mut self) -> Option<Task> {
        self.completed = true;
        if self.frequency.is_recurring() {
            Some(self.clone().with_completed(false))
        } else {
            None
        }
    }

    /// Clears the completion flag.
    pub fn mark_incomplete(&mut self) {
        self.completed = false;
    }

    /// Whether the task belongs in today's plan.
    ///
    /// Recurring tasks are always due; one-time tasks are due until completed.
    pub fn is_due_today(&self) -> bool {
        self.frequency.is_recurring() || !self.completed
    }

    /// Numeric priority (high=3, medium=2, low=1).
    #[inline]
    pub fn priority_score(&self) -> u8 {
        self.priority.score()
    }

    /// Case-insensitive substring match on name and description.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meds() -> Task {
        Task::new("Meds", "Heart pill", Priority::High, Frequency::Daily, 5).unwrap()
    }

    #[test]
    fn test_task_new() {
        let task = meds();
        assert_eq!(task.name, "Meds");
        assert_eq!(task.description, "Heart pill");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.frequency, Frequency::Daily);
        assert_eq!(task.duration_minutes, 5);
        assert!(!task.is_completed());
    }

    #[test]
    fn test_task_rejects_bad_input() {
        assert_eq!(
            Task::new("", "", Priority::Low, Frequency::Daily, 5),
            Err(PawError::EmptyName)
        );
        assert_eq!(
            Task::new("Walk", "", Priority::Low, Frequency::Daily, -10),
            Err(PawError::NegativeDuration(-10))
        );
        assert_eq!(
            Task::parse("Walk", "", "urgent", "daily", 10),
            Err(PawError::InvalidPriority("urgent".into()))
        );
        assert_eq!(
            Task::parse("Walk", "", "high", "hourly", 10),
            Err(PawError::InvalidFrequency("hourly".into()))
        );
    }

    #[test]
    fn test_task_parse_labels() {
        let task = Task::parse("Walk", "Park", "HIGH", " twice-daily ", 30).unwrap();
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.frequency, Frequency::TwiceDaily);

        let once = Task::parse("Vet", "", "medium", "once", 60).unwrap();
        assert_eq!(once.frequency, Frequency::OneTime);
    }

    #[test]
    fn test_zero_duration_allowed() {
        let task = Task::new("Check water", "", Priority::Low, Frequency::Daily, 0).unwrap();
        assert_eq!(task.duration_minutes, 0);
    }

    #[test]
    fn test_mark_complete_recurring() {
        let mut task = meds();
        let next = task.mark_complete().unwrap();

        assert!(task.is_completed());
        assert!(!next.is_completed());
        assert_eq!(next.name, "Meds");
        assert_eq!(next.description, "Heart pill");
        assert_eq!(next.priority, Priority::High);
        assert_eq!(next.frequency, Frequency::Daily);
        assert_eq!(next.duration_minutes, 5);
        assert_eq!(next, meds());
    }

    #[test]
    fn test_mark_complete_weekly() {
        let mut task = Task::new("Bath", "", Priority::Medium, Frequency::Weekly, 45).unwrap();
        let next = task.mark_complete();
        assert!(task.is_completed());
        assert_eq!(next.map(|t| t.frequency), Some(Frequency::Weekly));
    }

    #[test]
    fn test_mark_complete_one_time() {
        let mut task = Task::new("Vet", "", Priority::High, Frequency::OneTime, 60).unwrap();
        assert!(task.mark_complete().is_none());
        assert!(task.is_completed());
    }

    #[test]
    fn test_mark_incomplete() {
        let mut task = meds().with_completed(true);
        assert!(task.is_completed());
        task.mark_incomplete();
        assert!(!task.is_completed());
    }

    #[test]
    fn test_is_due_today() {
        let mut weekly = Task::new("Bath", "", Priority::Low, Frequency::Weekly, 45).unwrap();
        assert!(weekly.is_due_today());
        weekly.mark_complete();
        assert!(weekly.is_due_today());

        let mut once = Task::new("Vet", "", Priority::High, Frequency::OneTime, 60).unwrap();
        assert!(once.is_due_today());
        once.mark_complete();
        assert!(!once.is_due_today());
    }

    #[test]
    fn test_priority_order_and_score() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::High.score(), 3);
        assert_eq!(Priority::Medium.score(), 2);
        assert_eq!(Priority::Low.score(), 1);
        assert_eq!(meds().priority_score(), 3);
    }

    #[test]
    fn test_times_per_day() {
        assert_eq!(Frequency::Daily.times_per_day(), 1);
        assert_eq!(Frequency::TwiceDaily.times_per_day(), 2);
        assert_eq!(Frequency::ThreeTimesDaily.times_per_day(), 3);
        assert_eq!(Frequency::Weekly.times_per_day(), 1);
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&meds()).unwrap();
        assert!(json.contains("\"priority\":\"high\""));
        assert!(json.contains("\"frequency\":\"daily\""));

        let task: Task = serde_json::from_str(
            r#"{"name":"Groom","priority":"low","frequency":"three-times-daily","duration_minutes":15,"completed":true}"#,
        )
        .unwrap();
        assert_eq!(task.frequency, Frequency::ThreeTimesDaily);
        assert!(task.is_completed());
        assert_eq!(task.description, "");
    }

    #[test]
    fn test_serde_rejects_negative_duration() {
        let result: std::result::Result<Task, _> = serde_json::from_str(
            r#"{"name":"Walk","priority":"high","frequency":"daily","duration_minutes":-3}"#,
        );
        assert!(result.is_err());
    }
}
