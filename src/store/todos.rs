/// Todo list store
///
/// Straightforward CRUD over an in-memory list. Todos are not persisted.

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// State store for the todo list
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    /// Create an empty todo list
    pub fn new() -> Self {
        Self { todos: Vec::new(), next_id: 1 }
    }

    /// Every todo, in insertion order
    pub fn all_todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Completed todos only
    pub fn completed_todos(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| t.completed).collect()
    }

    /// Not-yet-completed todos only
    pub fn active_todos(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| !t.completed).collect()
    }

    /// Total number of todos
    pub fn todos_count(&self) -> usize {
        self.todos.len()
    }

    /// Number of completed todos
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Add a todo; whitespace-only text is rejected. Returns the new id
    pub fn add_todo(&mut self, text: &str) -> Option<u64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.todos.push(Todo {
            id,
            text: trimmed.to_string(),
            completed: false,
        });
        Some(id)
    }

    /// Flip a todo's completed flag; no-op if the id is unknown
    pub fn toggle_todo(&mut self, id: u64) {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.completed = !todo.completed;
        }
    }

    /// Remove a todo; no-op if absent
    pub fn remove_todo(&mut self, id: u64) {
        self.todos.retain(|t| t.id != id);
    }

    /// Drop every completed todo
    pub fn clear_completed(&mut self) {
        self.todos.retain(|t| !t.completed);
    }
}
