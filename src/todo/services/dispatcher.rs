//! Command dispatcher driving the guard, the list, and both ports.

use crate::todo::{
    domain::{
        CommandKind, FinishedEdit, InvalidTransition, OperationState, Reordered, Todo,
        TodoCommand, TodoCommandError, TodoDomainError, TodoEvent, TodoId, TodoList,
        TransitionGuard,
    },
    ports::{TodoPresenter, TodoStore, TodoStoreError, TodoStoreResult},
    services::{DispatcherConfig, GuardPolicy},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// What a command did to the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum TodoChange {
    /// A todo was appended.
    Added {
        /// The new todo.
        todo: Todo,
    },
    /// A todo changed in place.
    Updated {
        /// The todo after the change.
        todo: Todo,
    },
    /// A todo entered edit mode.
    EditStarted {
        /// The todo now being edited.
        todo: Todo,
    },
    /// A todo was removed.
    Removed {
        /// The removed todo.
        todo: Todo,
    },
    /// Completed todos were removed.
    Cleared {
        /// Identifiers of the removed todos, in their former order.
        ids: Vec<TodoId>,
    },
    /// A todo moved.
    Reordered {
        /// The dragged todo.
        id: TodoId,
        /// Its index before the move.
        from: usize,
        /// Its index after the move.
        to: usize,
    },
    /// Nothing matched; the list is as it was.
    Unchanged,
}

/// Outcome of an accepted command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    /// Kind of the command that ran.
    pub command: CommandKind,
    /// Effect on the list.
    pub change: TodoChange,
    /// Guard state after the completion signal.
    pub state: OperationState,
}

/// Errors returned by the dispatcher.
#[derive(Debug, Error)]
pub enum TodoDispatchError {
    /// The inbound command could not be decoded.
    #[error(transparent)]
    Command(#[from] TodoCommandError),
    /// The guard rejected the command under [`GuardPolicy::Enforcing`].
    #[error("command rejected by operation guard: {0}")]
    InvalidTransition(#[from] InvalidTransition),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// The store failed to save the snapshot.
    #[error(transparent)]
    Store(#[from] TodoStoreError),
}

/// Result type for dispatcher operations.
pub type TodoDispatchResult<T> = Result<T, TodoDispatchError>;

/// Owns the todo list and the operation guard and runs commands against them.
///
/// `dispatch` takes `&mut self`, so a command is fully processed (guard,
/// mutation, save, presentation, completion) before the next one starts.
pub struct TodoDispatcher<S, P>
where
    S: TodoStore,
    P: TodoPresenter,
{
    store: Arc<S>,
    presenter: Arc<P>,
    config: DispatcherConfig,
    todos: TodoList,
    guard: TransitionGuard,
}

impl<S, P> TodoDispatcher<S, P>
where
    S: TodoStore,
    P: TodoPresenter,
{
    /// Loads the stored list and draws it.
    ///
    /// A load failure is logged and the dispatcher starts with an empty list.
    pub async fn start(store: Arc<S>, presenter: Arc<P>, config: DispatcherConfig) -> Self {
        let todos = match store.load().await {
            Ok(snapshot) => TodoList::from_persisted(snapshot),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load todo list, starting empty");
                TodoList::new()
            }
        };
        tracing::debug!(count = todos.len(), "todo list loaded");
        presenter.render_all(todos.as_slice());
        Self {
            store,
            presenter,
            config,
            todos,
            guard: TransitionGuard::new(),
        }
    }

    /// Returns the current list.
    #[must_use]
    pub const fn todos(&self) -> &TodoList {
        &self.todos
    }

    /// Returns the current operation state.
    #[must_use]
    pub const fn state(&self) -> OperationState {
        self.guard.state()
    }

    /// Returns the operation guard.
    #[must_use]
    pub const fn guard(&self) -> &TransitionGuard {
        &self.guard
    }

    /// Returns the dispatcher configuration.
    #[must_use]
    pub const fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Feeds a raw event to the operation guard without touching the list.
    ///
    /// Hosts use this to mark work they run outside the dispatcher, such as
    /// an import, so that commands arriving meanwhile see a busy guard.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when the event has no table entry for
    /// the current state.
    pub fn signal(&mut self, event: TodoEvent) -> Result<OperationState, InvalidTransition> {
        self.guard.transition(event)
    }

    /// Decodes and runs a command given as a kind name and payload object.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDispatchError::Command`] when the kind is unknown or the
    /// payload does not fit it; nothing is mutated and the guard is not
    /// touched. Otherwise behaves like [`Self::dispatch`].
    pub async fn dispatch_raw(
        &mut self,
        kind: &str,
        payload: Value,
    ) -> TodoDispatchResult<DispatchReport> {
        let command = TodoCommand::from_parts(kind, payload)
            .inspect_err(|err| tracing::error!(kind, error = %err, "rejected inbound command"))?;
        self.dispatch(command).await
    }

    /// Runs a command.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDispatchError::InvalidTransition`] when the guard
    /// rejects the command under [`GuardPolicy::Enforcing`],
    /// [`TodoDispatchError::Domain`] when an add is rejected for empty text or
    /// because no identifiers are left, and [`TodoDispatchError::Store`] when
    /// the snapshot cannot be saved. The last two signal `Failure` to the
    /// guard.
    pub async fn dispatch(&mut self, command: TodoCommand) -> TodoDispatchResult<DispatchReport> {
        let kind = command.kind();
        tracing::debug!(command = kind.as_str(), "dispatching todo command");

        if let Err(violation) = self.guard.transition(kind.event()) {
            if self.config.guard_policy == GuardPolicy::Enforcing {
                return Err(violation.into());
            }
        }

        let change = match self.apply(command) {
            Ok(change) => change,
            Err(err) => {
                tracing::debug!(command = kind.as_str(), error = %err, "todo command rejected");
                self.complete(TodoEvent::Failure);
                return Err(err.into());
            }
        };

        let saved = self.persist().await;
        self.present(&change);
        if let Err(err) = saved {
            tracing::warn!(command = kind.as_str(), error = %err, "failed to save todo list");
            self.complete(TodoEvent::Failure);
            return Err(err.into());
        }

        self.complete(TodoEvent::Success);
        Ok(DispatchReport {
            command: kind,
            change,
            state: self.guard.state(),
        })
    }

    fn apply(&mut self, command: TodoCommand) -> Result<TodoChange, TodoDomainError> {
        let change = match command {
            TodoCommand::AddTodo { text } => TodoChange::Added {
                todo: self.todos.add(&text)?,
            },
            TodoCommand::EditTodo { id } => self
                .todos
                .begin_edit(id)
                .cloned()
                .map_or(TodoChange::Unchanged, |todo| TodoChange::EditStarted { todo }),
            TodoCommand::FinishEdit { id, text } => match self.todos.finish_edit(id, &text) {
                FinishedEdit::Saved(todo) => TodoChange::Updated { todo },
                FinishedEdit::Deleted(todo) => TodoChange::Removed { todo },
                FinishedEdit::Missing => TodoChange::Unchanged,
            },
            TodoCommand::DeleteTodo { id } => self
                .todos
                .delete(id)
                .map_or(TodoChange::Unchanged, |todo| TodoChange::Removed { todo }),
            TodoCommand::ToggleTodo { id } => self
                .todos
                .toggle_completed(id)
                .cloned()
                .map_or(TodoChange::Unchanged, |todo| TodoChange::Updated { todo }),
            TodoCommand::ClearCompleted => TodoChange::Cleared {
                ids: self
                    .todos
                    .clear_completed()
                    .iter()
                    .map(Todo::id)
                    .collect(),
            },
            TodoCommand::ReorderTodos {
                dragged_id,
                target_id,
            } => self.todos.reorder(dragged_id, target_id).map_or(
                TodoChange::Unchanged,
                |Reordered { from, to }| TodoChange::Reordered {
                    id: dragged_id,
                    from,
                    to,
                },
            ),
        };
        Ok(change)
    }

    async fn persist(&self) -> TodoStoreResult<()> {
        if self.config.persist_editing {
            return self.store.save(self.todos.as_slice()).await;
        }
        let snapshot: Vec<Todo> = self.todos.iter().map(Todo::without_editing).collect();
        self.store.save(&snapshot).await
    }

    fn present(&self, change: &TodoChange) {
        match change {
            // The first todo replaces the empty-state view.
            TodoChange::Added { todo } if self.todos.len() == 1 => {
                self.presenter.render_all(self.todos.as_slice());
                tracing::trace!(todo_id = %todo.id(), "rendered first todo");
            }
            TodoChange::Added { todo } | TodoChange::Updated { todo } => {
                self.presenter.render_one(todo);
            }
            TodoChange::EditStarted { todo } => {
                self.presenter.render_one(todo);
                self.presenter.focus_edit(todo.id());
            }
            TodoChange::Removed { todo } => self.presenter.remove_one(todo.id()),
            TodoChange::Cleared { .. } | TodoChange::Reordered { .. } => {
                self.presenter.render_all(self.todos.as_slice());
            }
            TodoChange::Unchanged => {}
        }
    }

    /// Sends the completion signal for the command that just ran.
    ///
    /// Commands that never left `Idle` (finish-edit) have nothing to close.
    fn complete(&mut self, signal: TodoEvent) {
        if self.guard.state().is_idle() {
            return;
        }
        if let Err(violation) = self.guard.transition(signal) {
            tracing::debug!(%violation, "completion signal not applied");
        }
    }
}
