//! Presenter that records notifications instead of drawing anything.

use std::sync::{Arc, Mutex};

use crate::todo::{
    domain::{Todo, TodoId},
    ports::TodoPresenter,
};

/// One recorded presenter notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    /// `render_all` with the ids in display order.
    RenderAll(Vec<TodoId>),
    /// `render_one` with the todo as it was passed.
    RenderOne(Todo),
    /// `remove_one`.
    RemoveOne(TodoId),
    /// `focus_edit`.
    FocusEdit(TodoId),
}

/// Thread-safe presenter that keeps every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    calls: Arc<Mutex<Vec<PresenterCall>>>,
}

impl RecordingPresenter {
    /// Creates a presenter with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Returns and forgets the calls recorded so far.
    #[must_use]
    pub fn take_calls(&self) -> Vec<PresenterCall> {
        self.calls
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }

    fn record(&self, call: PresenterCall) {
        match self.calls.lock() {
            Ok(mut guard) => guard.push(call),
            Err(err) => tracing::warn!(error = %err, "presenter call log is poisoned"),
        }
    }
}

impl TodoPresenter for RecordingPresenter {
    fn render_all(&self, todos: &[Todo]) {
        self.record(PresenterCall::RenderAll(
            todos.iter().map(Todo::id).collect(),
        ));
    }

    fn render_one(&self, todo: &Todo) {
        self.record(PresenterCall::RenderOne(todo.clone()));
    }

    fn remove_one(&self, id: TodoId) {
        self.record(PresenterCall::RemoveOne(id));
    }

    fn focus_edit(&self, id: TodoId) {
        self.record(PresenterCall::FocusEdit(id));
    }
}
