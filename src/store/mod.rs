/// State stores for the application's four features
///
/// The habit store is the core; the kanban board is the other persisted
/// store, while todos and the counter are in-memory only.

pub mod counter;
pub mod habits;
pub mod kanban;
pub mod todos;

pub use counter::CounterStore;
pub use habits::{HabitStore, HABITS_STORAGE_KEY};
pub use kanban::{KanbanCard, KanbanColumn, KanbanStore, KANBAN_STORAGE_KEY};
pub use todos::{Todo, TodoStore};
