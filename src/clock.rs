/// Clock collaborator for deriving "today"
///
/// The stores never read the wall clock directly; they ask an injected
/// clock for the current calendar date. That keeps scheduling, streak and
/// week-window logic deterministic under test.

use chrono::{Local, NaiveDate};

/// Source of the current local calendar date
pub trait Clock {
    /// The current date, in local time
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation using the system's local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
