/// Public library interface for the habit tracker core
///
/// This crate holds the state stores of a small local productivity app: a
/// habit tracker with frequency-based scheduling and streak calculation,
/// plus a kanban board, a todo list and a counter. Persistent stores talk
/// to an injected key-value storage collaborator and derive "today" from
/// an injected clock, so everything is testable with in-memory fakes.

// Internal modules
mod clock;
mod domain;
mod storage;
mod store;

// Re-export public modules and types
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::*;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::*;
