/// Streak calculation and habit statistics
///
/// Pure functions over a habit's completion map. The store passes in
/// "today" explicitly so these stay deterministic and clock-free.

use serde::{Deserialize, Serialize};
use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::Habit;

/// Upper bound on the backward streak walk, to avoid unbounded scans
/// on very old habits.
const STREAK_SCAN_LIMIT: u32 = 365;

/// Aggregate statistics for a single habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStats {
    /// Sum of all completion counts across all dates
    pub total_completions: u32,
    /// Number of distinct dates with at least one completion
    pub days_tracked: u32,
    /// Consecutive completed days ending at-or-before today
    pub current_streak: u32,
}

impl HabitStats {
    /// Compute the statistics for a habit as of the given date
    pub fn for_habit(habit: &Habit, today: NaiveDate) -> Self {
        Self {
            total_completions: habit.completions.values().sum(),
            days_tracked: habit.completions.len() as u32,
            current_streak: current_streak(habit, today),
        }
    }
}

/// Calculate the current streak for a habit
///
/// Starting at `today`, walk backward one calendar day at a time (at most
/// 365 steps). A date with at least one completion extends the streak. A
/// date without one breaks it, except for today itself: today may simply
/// not be completed yet, so it is skipped without breaking or counting.
pub fn current_streak(habit: &Habit, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut date = today;

    for _ in 0..STREAK_SCAN_LIMIT {
        if habit.completion_on(date) > 0 {
            streak += 1;
        } else if date != today {
            break;
        }
        date -= Duration::days(1);
    }

    streak
}

/// Monday of the week containing `date`
///
/// If `date` is a Sunday this goes back six days; otherwise back to the
/// week's Monday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
