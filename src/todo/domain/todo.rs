//! Todo entity.

use super::{TodoId, TodoText};
use serde::{Deserialize, Serialize};

/// A single entry in the todo list.
///
/// The serialized form is the persisted record: `{id, text, completed,
/// editing}`. Missing flags default to `false` when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    text: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    editing: bool,
}

/// Parameter object for reconstructing a persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted identifier.
    pub id: TodoId,
    /// Persisted text.
    pub text: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted edit-mode flag.
    pub editing: bool,
}

impl Todo {
    /// Creates an open, non-editing todo.
    #[must_use]
    pub fn new(id: TodoId, text: TodoText) -> Self {
        Self {
            id,
            text: text.into_inner(),
            completed: false,
            editing: false,
        }
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            text: data.text,
            completed: data.completed,
            editing: data.editing,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the todo text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` once the todo has been checked off.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns `true` while the todo is in edit mode.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Returns a copy with the edit-mode flag cleared.
    #[must_use]
    pub fn without_editing(&self) -> Self {
        Self {
            editing: false,
            ..self.clone()
        }
    }

    pub(crate) const fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    pub(crate) const fn begin_edit(&mut self) {
        self.editing = true;
    }

    pub(crate) fn finish_edit(&mut self, text: TodoText) {
        self.text = text.into_inner();
        self.editing = false;
    }
}
