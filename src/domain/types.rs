/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like HabitId, DayOfWeek, and
/// Frequency that are used by Habit and the habit store.

use serde::{Deserialize, Serialize};
use chrono::Weekday;
use uuid::Uuid;

use crate::domain::DomainError;

/// Unique identifier for a habit
///
/// Ids are opaque strings on the wire. Freshly created habits get UUID v4
/// ids, but previously persisted data may carry ids in other formats, so
/// this is a string wrapper rather than a `Uuid` wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub String);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for HabitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Day of the week
///
/// Serialized as lowercase full names ("monday" .. "sunday") to stay
/// compatible with previously persisted habit data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// How often a habit should be performed
///
/// This is a tagged union keyed by `frequencyType`: each variant carries
/// only the fields that are meaningful for it, so a daily habit cannot
/// accidentally hold a `daysOfWeek` list. The serde attributes reproduce
/// the persisted wire shape exactly (the tag and the variant fields sit
/// next to the other habit fields via `#[serde(flatten)]` on `Habit`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "frequencyType")]
pub enum Frequency {
    /// Every single day
    #[serde(rename = "daily")]
    Daily,
    /// Once within any given week
    #[serde(rename = "weekly")]
    Weekly,
    /// Specific days of the week (e.g., Monday, Wednesday, Friday)
    #[serde(rename = "days-of-week")]
    DaysOfWeek {
        #[serde(rename = "daysOfWeek")]
        days_of_week: Vec<DayOfWeek>,
    },
    /// A target number of times per week (1-7)
    #[serde(rename = "times-per-week")]
    TimesPerWeek {
        #[serde(rename = "timesPerWeek")]
        times_per_week: u32,
    },
}

impl Frequency {
    /// Validate that a frequency value is reasonable
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Frequency::DaysOfWeek { days_of_week } => {
                if days_of_week.is_empty() {
                    return Err(DomainError::InvalidFrequency(
                        "Days-of-week frequency must specify at least one day".to_string()
                    ));
                }
                if days_of_week.len() > 7 {
                    return Err(DomainError::InvalidFrequency(
                        "Days-of-week frequency cannot have more than 7 days".to_string()
                    ));
                }
            }
            Frequency::TimesPerWeek { times_per_week } => {
                if *times_per_week == 0 || *times_per_week > 7 {
                    return Err(DomainError::InvalidFrequency(
                        format!("Times-per-week frequency must be 1-7, got {}", times_per_week)
                    ));
                }
            }
            _ => {} // Daily and Weekly are always valid
        }
        Ok(())
    }

    /// Check if a habit with this frequency is applicable on a given weekday
    ///
    /// Daily and weekly habits are applicable every day. Times-per-week is
    /// also applicable every day: the weekly count target is advisory, the
    /// user picks which days to work on it.
    pub fn is_applicable_on(&self, day: DayOfWeek) -> bool {
        match self {
            Frequency::Daily => true,
            Frequency::Weekly => true,
            Frequency::TimesPerWeek { .. } => true,
            Frequency::DaysOfWeek { days_of_week } => days_of_week.contains(&day),
        }
    }
}
