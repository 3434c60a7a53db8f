//! Presentation port notified after each accepted command.

use crate::todo::domain::{Todo, TodoId};

/// Rendering notifications.
///
/// Calls are fire-and-forget: the dispatcher does not depend on their
/// outcome, so adapters report their own failures.
pub trait TodoPresenter: Send + Sync {
    /// Redraws the whole list.
    fn render_all(&self, todos: &[Todo]);

    /// Draws or redraws a single todo in place.
    fn render_one(&self, todo: &Todo);

    /// Removes a single todo from the view.
    fn remove_one(&self, id: TodoId);

    /// Moves input focus to the todo's edit field.
    fn focus_edit(&self, id: TodoId);
}
