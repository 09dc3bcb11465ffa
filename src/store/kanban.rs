/// Kanban board store
///
/// Columns and cards with manual ordering, persisted as one JSON blob.
/// Same persistence contract as the habit store: load once at
/// construction, degrade to defaults on bad data, persist after every
/// mutation, swallow (but log) write failures.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::storage::KeyValueStorage;

/// Storage key the board is persisted under
pub const KANBAN_STORAGE_KEY: &str = "habit-tracker-kanban";

/// A card on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCard {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Which column the card sits in
    pub column_id: String,
    /// Position within the column, 0-based
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

/// A column on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanColumn {
    pub id: String,
    pub title: String,
    /// Position on the board, 0-based
    pub order: u32,
    /// Display color as a hex string (e.g. "#e74c3c")
    pub color: String,
}

/// The persisted board state: columns plus cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct BoardState {
    columns: Vec<KanbanColumn>,
    cards: Vec<KanbanCard>,
}

impl BoardState {
    /// A fresh board with the three standard columns and no cards
    fn with_default_columns() -> Self {
        Self {
            columns: vec![
                KanbanColumn {
                    id: "todo".to_string(),
                    title: "To Do".to_string(),
                    order: 0,
                    color: "#e74c3c".to_string(),
                },
                KanbanColumn {
                    id: "in-progress".to_string(),
                    title: "In Progress".to_string(),
                    order: 1,
                    color: "#f39c12".to_string(),
                },
                KanbanColumn {
                    id: "done".to_string(),
                    title: "Done".to_string(),
                    order: 2,
                    color: "#27ae60".to_string(),
                },
            ],
            cards: Vec::new(),
        }
    }
}

/// State store for the kanban board
pub struct KanbanStore<S: KeyValueStorage> {
    storage: S,
    state: BoardState,
}

impl<S: KeyValueStorage> KanbanStore<S> {
    /// Create a store, loading any persisted board from storage
    ///
    /// Absent or unparsable data falls back to the default three-column
    /// board (logged, non-fatal).
    pub fn new(storage: S) -> Self {
        let state = Self::load(&storage);
        Self { storage, state }
    }

    fn load(storage: &S) -> BoardState {
        let stored = match storage.get(KANBAN_STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return BoardState::with_default_columns(),
            Err(e) => {
                tracing::error!("Error loading kanban data from storage: {}", e);
                return BoardState::with_default_columns();
            }
        };

        match serde_json::from_str(&stored) {
            Ok(state) => state,
            Err(e) => {
                tracing::error!("Error parsing stored kanban data, using defaults: {}", e);
                BoardState::with_default_columns()
            }
        }
    }

    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.state) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!("Error serializing kanban data: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(KANBAN_STORAGE_KEY, &blob) {
            tracing::error!("Error saving kanban data to storage: {}", e);
        }
    }

    // Query operations

    /// Columns in board order
    pub fn columns(&self) -> Vec<&KanbanColumn> {
        let mut columns: Vec<&KanbanColumn> = self.state.columns.iter().collect();
        columns.sort_by_key(|c| c.order);
        columns
    }

    /// Cards in a column, in column order
    pub fn cards_by_column(&self, column_id: &str) -> Vec<&KanbanCard> {
        let mut cards: Vec<&KanbanCard> = self
            .state
            .cards
            .iter()
            .filter(|c| c.column_id == column_id)
            .collect();
        cards.sort_by_key(|c| c.order);
        cards
    }

    /// Every card on the board, unordered
    pub fn all_cards(&self) -> &[KanbanCard] {
        &self.state.cards
    }

    // Mutators

    /// Add a card at the end of a column; returns the new card's id
    pub fn add_card(&mut self, title: String, description: String, column_id: String) -> String {
        let order = self
            .state
            .cards
            .iter()
            .filter(|c| c.column_id == column_id)
            .count() as u32;

        let card = KanbanCard {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            column_id,
            order,
            created_at: Utc::now(),
        };
        let id = card.id.clone();
        self.state.cards.push(card);
        self.persist();
        id
    }

    /// Replace the card with the same id; no-op if the id is unknown
    pub fn update_card(&mut self, card: KanbanCard) {
        if let Some(existing) = self.state.cards.iter_mut().find(|c| c.id == card.id) {
            *existing = card;
            self.persist();
        }
    }

    /// Remove a card; no-op if absent
    pub fn delete_card(&mut self, card_id: &str) {
        let before = self.state.cards.len();
        self.state.cards.retain(|c| c.id != card_id);
        if self.state.cards.len() != before {
            self.persist();
        }
    }

    /// Move a card to a column position, reordering both affected columns
    ///
    /// No-op if the card id is unknown.
    pub fn move_card(&mut self, card_id: &str, new_column_id: &str, new_order: u32) {
        let Some(pos) = self.state.cards.iter().position(|c| c.id == card_id) else {
            return;
        };

        let old_column_id = self.state.cards[pos].column_id.clone();
        self.state.cards[pos].column_id = new_column_id.to_string();
        self.state.cards[pos].order = new_order;

        // Shift the other cards in the target column around the insertion point
        let mut index = 0;
        for card in self.state.cards.iter_mut() {
            if card.column_id == new_column_id && card.id != card_id {
                card.order = if index >= new_order { index + 1 } else { index };
                index += 1;
            }
        }

        // Close the gap left in the source column
        if old_column_id != new_column_id {
            let mut index = 0;
            for card in self.state.cards.iter_mut() {
                if card.column_id == old_column_id {
                    card.order = index;
                    index += 1;
                }
            }
        }

        self.persist();
    }

    /// Add a column at the end of the board; returns the new column's id
    pub fn add_column(&mut self, title: String, color: String) -> String {
        let column = KanbanColumn {
            id: Uuid::new_v4().to_string(),
            title,
            order: self.state.columns.len() as u32,
            color,
        };
        let id = column.id.clone();
        self.state.columns.push(column);
        self.persist();
        id
    }

    /// Replace the column with the same id; no-op if the id is unknown
    pub fn update_column(&mut self, column: KanbanColumn) {
        if let Some(existing) = self.state.columns.iter_mut().find(|c| c.id == column.id) {
            *existing = column;
            self.persist();
        }
    }

    /// Remove a column and every card in it; no-op if absent
    pub fn delete_column(&mut self, column_id: &str) {
        let before = self.state.columns.len();
        self.state.columns.retain(|c| c.id != column_id);
        if self.state.columns.len() != before {
            self.state.cards.retain(|c| c.column_id != column_id);
            self.persist();
        }
    }

    /// Access the underlying storage collaborator (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
