//! Inbound command vocabulary.
//!
//! The wire form is an internally tagged JSON object, for example
//! `{"type":"REORDER_TODOS","draggedId":1,"targetId":3}`.

use super::{TodoCommandError, TodoEvent, TodoId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A user intent with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum TodoCommand {
    /// Append a todo with the given text.
    AddTodo {
        /// Raw text as typed; trimmed before validation.
        text: String,
    },
    /// Put a todo into edit mode.
    EditTodo {
        /// Todo to edit.
        id: TodoId,
    },
    /// Commit an edit session; empty text deletes the todo.
    FinishEdit {
        /// Todo being edited.
        id: TodoId,
        /// Replacement text.
        text: String,
    },
    /// Remove a todo.
    DeleteTodo {
        /// Todo to remove.
        id: TodoId,
    },
    /// Flip a todo's completion flag.
    ToggleTodo {
        /// Todo to toggle.
        id: TodoId,
    },
    /// Remove every completed todo.
    ClearCompleted,
    /// Move the dragged todo into the target's slot.
    ReorderTodos {
        /// Todo being dragged.
        dragged_id: TodoId,
        /// Todo it was dropped on.
        #[serde(alias = "dropTargetId")]
        target_id: TodoId,
    },
}

impl TodoCommand {
    /// Builds an add command.
    #[must_use]
    pub fn add(text: impl Into<String>) -> Self {
        Self::AddTodo { text: text.into() }
    }

    /// Builds a finish-edit command.
    #[must_use]
    pub fn finish_edit(id: TodoId, text: impl Into<String>) -> Self {
        Self::FinishEdit {
            id,
            text: text.into(),
        }
    }

    /// Builds a reorder command.
    #[must_use]
    pub const fn reorder(dragged_id: TodoId, target_id: TodoId) -> Self {
        Self::ReorderTodos {
            dragged_id,
            target_id,
        }
    }

    /// Returns the command kind.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::AddTodo { .. } => CommandKind::AddTodo,
            Self::EditTodo { .. } => CommandKind::EditTodo,
            Self::FinishEdit { .. } => CommandKind::FinishEdit,
            Self::DeleteTodo { .. } => CommandKind::DeleteTodo,
            Self::ToggleTodo { .. } => CommandKind::ToggleTodo,
            Self::ClearCompleted => CommandKind::ClearCompleted,
            Self::ReorderTodos { .. } => CommandKind::ReorderTodos,
        }
    }

    /// Builds a command from a kind name and a payload object.
    ///
    /// A `null` payload is treated as an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`TodoCommandError::UnknownKind`] when `kind` is not part of
    /// the vocabulary and [`TodoCommandError::InvalidPayload`] when the
    /// payload is missing fields or has the wrong shape.
    pub fn from_parts(kind: &str, payload: Value) -> Result<Self, TodoCommandError> {
        let command_kind = CommandKind::try_from(kind)?;
        let mut fields = match payload {
            Value::Object(fields) => fields,
            Value::Null => Map::new(),
            other => {
                return Err(command_kind.invalid_payload(format!(
                    "expected a JSON object, found {other}"
                )));
            }
        };
        fields.insert(
            "type".to_owned(),
            Value::String(command_kind.as_str().to_owned()),
        );
        serde_json::from_value(Value::Object(fields))
            .map_err(|err| command_kind.invalid_payload(err.to_string()))
    }

    /// Parses a complete JSON command object.
    ///
    /// # Errors
    ///
    /// Returns [`TodoCommandError::Malformed`] when the input is not a JSON
    /// object with a string `type` field, and the errors of
    /// [`Self::from_parts`] otherwise.
    pub fn from_json(input: &str) -> Result<Self, TodoCommandError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|err| TodoCommandError::Malformed(err.to_string()))?;
        let Value::Object(mut fields) = value else {
            return Err(TodoCommandError::Malformed(
                "command must be a JSON object".to_owned(),
            ));
        };
        let Some(Value::String(kind)) = fields.remove("type") else {
            return Err(TodoCommandError::Malformed(
                "command is missing a string \"type\" field".to_owned(),
            ));
        };
        Self::from_parts(&kind, Value::Object(fields))
    }
}

/// Command kinds without their payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandKind {
    /// See [`TodoCommand::AddTodo`].
    AddTodo,
    /// See [`TodoCommand::EditTodo`].
    EditTodo,
    /// See [`TodoCommand::FinishEdit`].
    FinishEdit,
    /// See [`TodoCommand::DeleteTodo`].
    DeleteTodo,
    /// See [`TodoCommand::ToggleTodo`].
    ToggleTodo,
    /// See [`TodoCommand::ClearCompleted`].
    ClearCompleted,
    /// See [`TodoCommand::ReorderTodos`].
    ReorderTodos,
}

impl CommandKind {
    /// Every command kind.
    pub const ALL: [Self; 7] = [
        Self::AddTodo,
        Self::EditTodo,
        Self::FinishEdit,
        Self::DeleteTodo,
        Self::ToggleTodo,
        Self::ClearCompleted,
        Self::ReorderTodos,
    ];

    /// Returns the guard event that opens this command's operation.
    #[must_use]
    pub const fn event(self) -> TodoEvent {
        match self {
            Self::AddTodo => TodoEvent::AddTodo,
            Self::EditTodo => TodoEvent::EditTodo,
            Self::FinishEdit => TodoEvent::FinishEdit,
            Self::DeleteTodo => TodoEvent::DeleteTodo,
            Self::ToggleTodo => TodoEvent::ToggleTodo,
            Self::ClearCompleted => TodoEvent::ClearCompleted,
            Self::ReorderTodos => TodoEvent::ReorderTodos,
        }
    }

    /// Returns the canonical wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.event().as_str()
    }

    fn invalid_payload(self, reason: String) -> TodoCommandError {
        TodoCommandError::InvalidPayload {
            kind: self.as_str().to_owned(),
            reason,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CommandKind {
    type Error = TodoCommandError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| TodoCommandError::UnknownKind(value.to_owned()))
    }
}
