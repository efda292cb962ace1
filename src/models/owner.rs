//! Owner model.
//!
//! The owner holds the pets and the daily availability window. Aggregations
//! walk pet → task in order, so results list pets first-to-last and each
//! pet's tasks in insertion order.
//!
//! Name lookups report a missing pet as absence (`None` or an empty `Vec`),
//! never as an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Pet, Priority, Task};
use crate::error::{PawError, Result};
use crate::validation::{check_hours, check_name};

/// A pet owner with a daily availability window `[start_hour, end_hour)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OwnerRecord")]
pub struct Owner {
    /// Owner name.
    pub name: String,
    availability_start_hour: u8,
    availability_end_hour: u8,
    /// Free-form scheduling preferences (e.g. `ideal_walk_time = morning`).
    pub preferences: HashMap<String, String>,
    /// Pets in insertion order.
    pub pets: Vec<Pet>,
}

/// Unchecked wire form of an [`Owner`]; validated on conversion.
#[derive(Deserialize)]
struct OwnerRecord {
    name: String,
    availability_start_hour: u8,
    availability_end_hour: u8,
    #[serde(default)]
    preferences: HashMap<String, String>,
    #[serde(default)]
    pets: Vec<Pet>,
}

impl TryFrom<OwnerRecord> for Owner {
    type Error = PawError;

    fn try_from(record: OwnerRecord) -> Result<Self> {
        let mut owner = Owner::new(
            record.name,
            record.availability_start_hour,
            record.availability_end_hour,
        )?;
        owner.preferences = record.preferences;
        owner.pets = record.pets;
        Ok(owner)
    }
}

impl Owner {
    /// Creates an owner with no pets.
    ///
    /// # Errors
    /// [`PawError::EmptyName`], [`PawError::HourOutOfRange`] for hours past 23,
    /// and [`PawError::InvalidAvailability`] unless `start_hour < end_hour`.
    pub fn new(name: impl Into<String>, start_hour: u8, end_hour: u8) -> Result<Self> {
        let name = name.into();
        check_name(&name)?;
        check_hours(start_hour, end_hour)?;
        Ok(Self {
            name,
            availability_start_hour: start_hour,
            availability_end_hour: end_hour,
            preferences: HashMap::new(),
            pets: Vec::new(),
        })
    }

    /// First available hour.
    #[inline]
    pub fn availability_start_hour(&self) -> u8 {
        self.availability_start_hour
    }

    /// Hour at which availability ends (exclusive).
    #[inline]
    pub fn availability_end_hour(&self) -> u8 {
        self.availability_end_hour
    }

    /// Availability start in minutes since midnight.
    #[inline]
    pub fn availability_start_minute(&self) -> u32 {
        u32::from(self.availability_start_hour) * 60
    }

    /// Availability end in minutes since midnight.
    #[inline]
    pub fn availability_end_minute(&self) -> u32 {
        u32::from(self.availability_end_hour) * 60
    }

    /// `(end_hour - start_hour) * 60`.
    pub fn total_available_minutes(&self) -> u32 {
        self.availability_end_minute() - self.availability_start_minute()
    }

    /// Merges new preferences over the existing ones.
    pub fn update_preferences<I, K, V>(&mut self, preferences: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.preferences.extend(
            preferences
                .into_iter()
                .map(|(k, v)| (k.into(), v.into())),
        );
    }

    /// Appends a pet.
    pub fn add_pet(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    /// First pet whose name matches exactly.
    pub fn pet_by_name(&self, name: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.name == name)
    }

    /// Mutable access to the first pet whose name matches exactly.
    pub fn pet_by_name_mut(&mut self, name: &str) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|p| p.name == name)
    }

    /// High-priority tasks across all pets.
    pub fn high_priority_tasks(&self) -> Vec<&Task> {
        self.pets
            .iter()
            .flat_map(|p| p.tasks.iter())
            .filter(|t| t.priority == Priority::High)
            .collect()
    }

    /// Incomplete tasks of the named pet. Unknown name yields an empty `Vec`.
    pub fn incomplete_tasks_for_pet(&self, name: &str) -> Vec<&Task> {
        self.pet_by_name(name)
            .map(|p| p.tasks_by_status(false))
            .unwrap_or_default()
    }

    /// `(pet name, incomplete tasks)` for every pet, in pet order.
    pub fn incomplete_tasks_grouped(&self) -> Vec<(&str, Vec<&Task>)> {
        self.pets
            .iter()
            .map(|p| (p.name.as_str(), p.tasks_by_status(false)))
            .collect()
    }

    /// Tasks due today across all pets.
    pub fn daily_tasks(&self) -> Vec<&Task> {
        self.pets
            .iter()
            .flat_map(|p| p.tasks.iter())
            .filter(|t| t.is_due_today())
            .collect()
    }

    /// Sum of daily task minutes across all pets.
    pub fn total_daily_task_minutes(&self) -> u64 {
        self.pets.iter().map(Pet::total_task_duration).sum()
    }
}
