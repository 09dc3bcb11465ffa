/// Habit tracking store
///
/// The core state container of the application. It holds the ordered habit
/// collection, answers derived queries (today's habits, completion counts,
/// streaks), and applies mutations, re-serializing the whole collection to
/// the storage collaborator after every mutation.

use chrono::{Datelike, Duration};

use crate::clock::Clock;
use crate::domain::{week_start, DayOfWeek, DomainError, Frequency, Habit, HabitId, HabitStats};
use crate::storage::KeyValueStorage;

/// Storage key the habit collection is persisted under
///
/// Fixed for compatibility with previously persisted data.
pub const HABITS_STORAGE_KEY: &str = "habit-tracker-habits";

/// State store for the habit collection
///
/// Constructed with an injected storage collaborator and clock. The habit
/// list is loaded once at construction; absent or unparsable data degrades
/// to an empty collection (logged, non-fatal). Mutators persist after
/// applying; a write failure is logged and swallowed, leaving the
/// in-memory state authoritative until the next successful write.
pub struct HabitStore<S: KeyValueStorage, C: Clock> {
    storage: S,
    clock: C,
    habits: Vec<Habit>,
}

impl<S: KeyValueStorage, C: Clock> HabitStore<S, C> {
    /// Create a store, loading any persisted habits from storage
    pub fn new(storage: S, clock: C) -> Self {
        let habits = Self::load(&storage);
        tracing::info!("Habit store initialized with {} habits", habits.len());
        Self { storage, clock, habits }
    }

    /// Load the habit collection from storage
    ///
    /// Read and parse failures are logged and degrade to an empty
    /// collection rather than failing construction.
    fn load(storage: &S) -> Vec<Habit> {
        let stored = match storage.get(HABITS_STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::error!("Error loading habits from storage: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Habit>>(&stored) {
            Ok(mut habits) => {
                for habit in &mut habits {
                    habit.strip_zero_completions();
                }
                habits
            }
            Err(e) => {
                tracing::error!("Error parsing stored habits, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Serialize the whole collection to storage
    ///
    /// A failure leaves persisted state stale relative to memory; this is
    /// logged and otherwise swallowed (the in-memory mutation stands).
    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.habits) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!("Error serializing habits: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(HABITS_STORAGE_KEY, &blob) {
            tracing::error!("Error saving habits to storage: {}", e);
        }
    }

    // Query operations

    /// The full habit sequence, unfiltered
    pub fn all_habits(&self) -> &[Habit] {
        &self.habits
    }

    /// The habit with the given id, if any
    pub fn habit_by_id(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| &h.id == id)
    }

    /// Habits applicable today according to their frequency rule
    pub fn todays_habits(&self) -> Vec<&Habit> {
        let weekday: DayOfWeek = self.clock.today().weekday().into();
        self.habits
            .iter()
            .filter(|h| h.frequency.is_applicable_on(weekday))
            .collect()
    }

    /// Today's completion count for a habit (0 if unknown id)
    pub fn completion_today(&self, id: &HabitId) -> u32 {
        let today = self.clock.today();
        self.habit_by_id(id)
            .map(|h| h.completion_on(today))
            .unwrap_or(0)
    }

    /// Completions summed over the current Monday-to-Sunday week (0 if unknown id)
    pub fn completion_this_week(&self, id: &HabitId) -> u32 {
        let Some(habit) = self.habit_by_id(id) else {
            return 0;
        };

        let start = week_start(self.clock.today());
        (0..7)
            .map(|offset| habit.completion_on(start + Duration::days(offset)))
            .sum()
    }

    /// Whether the habit is complete for today
    ///
    /// True iff today's count is at least 1, for daily, weekly and
    /// days-of-week habits. Times-per-week habits are never reported
    /// complete here: their completeness is week-scoped and read through
    /// `completion_this_week` instead.
    pub fn is_complete_today(&self, id: &HabitId) -> bool {
        let Some(habit) = self.habit_by_id(id) else {
            return false;
        };

        match habit.frequency {
            Frequency::TimesPerWeek { .. } => false,
            _ => self.completion_today(id) >= 1,
        }
    }

    /// Aggregate statistics for a habit (None if unknown id)
    pub fn stats(&self, id: &HabitId) -> Option<HabitStats> {
        self.habit_by_id(id)
            .map(|h| HabitStats::for_habit(h, self.clock.today()))
    }

    // Mutators (each persists the whole collection after applying)

    /// Create a habit and append it to the collection
    ///
    /// Assigns a fresh id, the current timestamp as creation time and an
    /// empty completion map. Returns the new habit's id.
    pub fn add_habit(
        &mut self,
        name: String,
        description: String,
        frequency: Frequency,
    ) -> Result<HabitId, DomainError> {
        let habit = Habit::new(name, description, frequency)?;
        let id = habit.id.clone();
        tracing::debug!("Created habit: {} ({})", habit.name, id);
        self.habits.push(habit);
        self.persist();
        Ok(id)
    }

    /// Replace the stored habit with the same id; no-op if the id is unknown
    pub fn update_habit(&mut self, habit: Habit) {
        if let Some(existing) = self.habits.iter_mut().find(|h| h.id == habit.id) {
            *existing = habit;
            self.persist();
        }
    }

    /// Remove the habit with the given id; no-op if absent (idempotent)
    pub fn delete_habit(&mut self, id: &HabitId) {
        let before = self.habits.len();
        self.habits.retain(|h| &h.id != id);
        if self.habits.len() != before {
            self.persist();
        }
    }

    /// Increment today's completion count; no-op if the id is unknown
    pub fn complete_habit(&mut self, id: &HabitId) {
        let today = self.clock.today();
        if let Some(habit) = self.habits.iter_mut().find(|h| &h.id == id) {
            habit.record_completion(today);
            self.persist();
        }
    }

    /// Decrement today's completion count, removing the entry at zero;
    /// no-op if the id is unknown or today has no completions
    pub fn uncomplete_habit(&mut self, id: &HabitId) {
        let today = self.clock.today();
        if let Some(habit) = self.habits.iter_mut().find(|h| &h.id == id) {
            if habit.remove_completion(today) {
                self.persist();
            }
        }
    }

    /// Access the underlying storage collaborator (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
