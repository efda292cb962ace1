//! Pet model.
//!
//! A pet exclusively owns an ordered list of tasks. Insertion order is kept
//! for display; scheduling does not depend on it beyond tie-breaking.

use serde::{Deserialize, Serialize};

use super::{Priority, Task};

/// A pet and its care tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Pet name.
    pub name: String,
    /// Species (dog, cat, rabbit, ...).
    pub species: String,
    /// Age in years.
    #[serde(default)]
    pub age: u32,
    /// Special care requirements.
    #[serde(default)]
    pub special_needs: String,
    /// Care tasks in insertion order. Duplicates allowed.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Pet {
    /// Creates a pet with no tasks.
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            age: 0,
            special_needs: String::new(),
            tasks: Vec::new(),
        }
    }

    /// Sets the age in years.
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Sets special care requirements.
    pub fn with_special_needs(mut self, needs: impl Into<String>) -> Self {
        self.special_needs = needs.into();
        self
    }

    /// Appends a task. No deduplication.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Tasks with the given priority, in insertion order.
    pub fn tasks_by_priority(&self, level: Priority) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.priority == level).collect()
    }

    /// Tasks with the given completion status, in insertion order.
    pub fn tasks_by_status(&self, completed: bool) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_completed() == completed)
            .collect()
    }

    /// Case-insensitive keyword search over task names and descriptions.
    pub fn search_tasks(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.matches_lowercase(&needle))
            .collect()
    }

    /// Tasks due today, in insertion order.
    pub fn daily_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_due_today()).collect()
    }

    /// Daily tasks with each repeated `times_per_day()` times.
    ///
    /// A twice-daily walk appears twice. Feed the result to
    /// [`Scheduler::sort_tasks`](crate::scheduler::Scheduler::sort_tasks) or a
    /// custom placement pass when every occurrence needs a slot.
    pub fn expanded_daily_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_due_today())
            .flat_map(|t| std::iter::repeat(t).take(t.frequency.times_per_day() as usize))
            .collect()
    }

    /// Total minutes across daily tasks.
    pub fn total_task_duration(&self) -> u64 {
        self.daily_tasks()
            .iter()
            .map(|t| u64::from(t.duration_minutes))
            .sum()
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
