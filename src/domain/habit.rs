/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// activity the user wants to track, along with its validation rules.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{DomainError, Frequency, HabitId};

/// A habit represents something the user wants to do regularly
///
/// Each habit has a name, a frequency rule (how often it should be done),
/// and a per-date completion count map. The serde attributes pin the field
/// names to the shape of previously persisted data: camelCase fields, the
/// frequency tag and its variant fields flattened in among them, and
/// completion dates as `YYYY-MM-DD` keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Free-form description
    pub description: String,
    /// How often this habit should be performed
    #[serde(flatten)]
    pub frequency: Frequency,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
    /// Completion counts per calendar date; zero-valued entries are never stored
    pub completions: BTreeMap<NaiveDate, u32>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// Assigns a fresh id, the current time as the creation timestamp, and
    /// an empty completion map. Returns an error if any validation fails.
    pub fn new(
        name: String,
        description: String,
        frequency: Frequency,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_description(&description)?;
        frequency.validate()?;

        Ok(Self {
            id: HabitId::new(),
            name,
            description,
            frequency,
            created_at: Utc::now(),
            completions: BTreeMap::new(),
        })
    }

    /// Completion count recorded for a given date (0 if none)
    pub fn completion_on(&self, date: NaiveDate) -> u32 {
        self.completions.get(&date).copied().unwrap_or(0)
    }

    /// Record one completion for the given date
    pub fn record_completion(&mut self, date: NaiveDate) {
        *self.completions.entry(date).or_insert(0) += 1;
    }

    /// Remove one completion for the given date
    ///
    /// Removes the map entry entirely when the count reaches zero, so the
    /// completions map never stores a zero. Returns false when there was
    /// nothing to remove.
    pub fn remove_completion(&mut self, date: NaiveDate) -> bool {
        match self.completions.get_mut(&date) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.completions.remove(&date);
                true
            }
            None => false,
        }
    }

    /// Drop zero-valued completion entries
    ///
    /// Defensive normalization for data loaded from storage: the mutators
    /// never write zeros, but older or hand-edited blobs might contain them.
    pub fn strip_zero_completions(&mut self) {
        self.completions.retain(|_, count| *count > 0);
    }

    // Validation helper methods

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string()
            ));
        }

        Ok(())
    }

    /// Validate the description
    fn validate_description(description: &str) -> Result<(), DomainError> {
        if description.len() > 500 {
            return Err(DomainError::Validation {
                message: "Description cannot be longer than 500 characters".to_string()
            });
        }
        Ok(())
    }
}
