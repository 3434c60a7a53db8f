//! Operation state machine for in-flight todo commands.
//!
//! The guard tracks which kind of command is currently being processed. Every
//! command event leaves `Idle` for a named in-progress state and a completion
//! event brings it back, so an event arriving mid-operation shows up as an
//! invalid transition.

use super::{InvalidTransition, ParseOperationStateError, ParseTodoEventError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of the command currently being processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationState {
    /// No command is in progress.
    #[default]
    Idle,
    /// A todo is being added.
    Adding,
    /// A todo is entering edit mode.
    Editing,
    /// A todo is being deleted.
    Deleting,
    /// A todo's completion flag is being flipped.
    Toggling,
    /// Completed todos are being cleared.
    Clearing,
    /// A todo is being moved.
    Reordering,
    /// An edit session is being committed.
    FinishingEdit,
}

impl OperationState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Adding => "adding",
            Self::Editing => "editing",
            Self::Deleting => "deleting",
            Self::Toggling => "toggling",
            Self::Clearing => "clearing",
            Self::Reordering => "reordering",
            Self::FinishingEdit => "finishing_edit",
        }
    }

    /// Returns `true` when no command is in progress.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Looks up the transition table.
    ///
    /// Returns `None` when `event` is not valid from this state.
    #[must_use]
    pub const fn on(self, event: TodoEvent) -> Option<Self> {
        use TodoEvent as E;
        match (self, event) {
            (Self::Idle, E::AddTodo) => Some(Self::Adding),
            (Self::Idle, E::EditTodo) => Some(Self::Editing),
            (Self::Idle, E::DeleteTodo) => Some(Self::Deleting),
            (Self::Idle, E::ToggleTodo) => Some(Self::Toggling),
            (Self::Idle, E::ClearCompleted) => Some(Self::Clearing),
            (Self::Idle, E::ReorderTodos) => Some(Self::Reordering),
            (Self::Idle | Self::Editing, E::FinishEdit)
            | (
                Self::Adding
                | Self::Editing
                | Self::Deleting
                | Self::Toggling
                | Self::Clearing
                | Self::Reordering
                | Self::FinishingEdit,
                E::Success,
            )
            | (
                Self::Adding
                | Self::Editing
                | Self::Deleting
                | Self::Toggling
                | Self::Clearing
                | Self::Reordering,
                E::Failure,
            ) => Some(Self::Idle),
            (Self::FinishingEdit, E::Failure) => Some(Self::Editing),
            _ => None,
        }
    }
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OperationState {
    type Error = ParseOperationStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "idle" => Ok(Self::Idle),
            "adding" => Ok(Self::Adding),
            "editing" => Ok(Self::Editing),
            "deleting" => Ok(Self::Deleting),
            "toggling" => Ok(Self::Toggling),
            "clearing" => Ok(Self::Clearing),
            "reordering" => Ok(Self::Reordering),
            "finishing_edit" => Ok(Self::FinishingEdit),
            _ => Err(ParseOperationStateError(value.to_owned())),
        }
    }
}

/// Event fed to the [`TransitionGuard`].
///
/// Command events open an operation; `Success` and `Failure` close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoEvent {
    /// Add a todo.
    AddTodo,
    /// Enter edit mode.
    EditTodo,
    /// Commit an edit session.
    FinishEdit,
    /// Delete a todo.
    DeleteTodo,
    /// Flip a todo's completion flag.
    ToggleTodo,
    /// Remove all completed todos.
    ClearCompleted,
    /// Move a todo.
    ReorderTodos,
    /// The in-flight operation completed.
    Success,
    /// The in-flight operation failed.
    Failure,
}

impl TodoEvent {
    /// Every event, command events first.
    pub const ALL: [Self; 9] = [
        Self::AddTodo,
        Self::EditTodo,
        Self::FinishEdit,
        Self::DeleteTodo,
        Self::ToggleTodo,
        Self::ClearCompleted,
        Self::ReorderTodos,
        Self::Success,
        Self::Failure,
    ];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddTodo => "ADD_TODO",
            Self::EditTodo => "EDIT_TODO",
            Self::FinishEdit => "FINISH_EDIT",
            Self::DeleteTodo => "DELETE_TODO",
            Self::ToggleTodo => "TOGGLE_TODO",
            Self::ClearCompleted => "CLEAR_COMPLETED",
            Self::ReorderTodos => "REORDER_TODOS",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }

    /// Returns `true` for `Success` and `Failure`.
    #[must_use]
    pub const fn is_completion(self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }
}

impl fmt::Display for TodoEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TodoEvent {
    type Error = ParseTodoEventError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == normalized)
            .ok_or_else(|| ParseTodoEventError(value.to_owned()))
    }
}

/// Finite-state machine holding the single current operation.
///
/// The guard never panics: an event with no table entry is logged, counted,
/// and returned as an [`InvalidTransition`] while the state stays put.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionGuard {
    state: OperationState,
    last_completion: Option<TodoEvent>,
    rejected: u64,
}

impl TransitionGuard {
    /// Creates a guard in [`OperationState::Idle`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current operation state.
    #[must_use]
    pub const fn state(&self) -> OperationState {
        self.state
    }

    /// Returns the most recent completion event that was applied.
    #[must_use]
    pub const fn last_completion(&self) -> Option<TodoEvent> {
        self.last_completion
    }

    /// Returns how many events have been rejected so far.
    #[must_use]
    pub const fn rejected_count(&self) -> u64 {
        self.rejected
    }

    /// Applies `event` to the current state.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when the table has no entry for the
    /// current state and `event`. The state is left unchanged.
    pub fn transition(&mut self, event: TodoEvent) -> Result<OperationState, InvalidTransition> {
        let from = self.state;
        let Some(to) = from.on(event) else {
            self.rejected = self.rejected.saturating_add(1);
            tracing::error!(
                from = from.as_str(),
                event = event.as_str(),
                "invalid operation transition"
            );
            return Err(InvalidTransition { from, event });
        };
        tracing::trace!(
            from = from.as_str(),
            event = event.as_str(),
            to = to.as_str(),
            "operation transition"
        );
        self.state = to;
        if event.is_completion() {
            self.last_completion = Some(event);
        }
        Ok(to)
    }
}
