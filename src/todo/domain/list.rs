//! Ordered todo list and its mutation operations.
//!
//! Order is user-defined: nothing here sorts. Every operation is total; an
//! unknown identifier is a silent no-op reported through the return value.

use super::{Todo, TodoDomainError, TodoId, TodoIdGenerator, TodoText};
use std::collections::HashSet;

/// Result of finishing an edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishedEdit {
    /// The todo kept its place with new text and left edit mode.
    Saved(Todo),
    /// The submitted text was empty, so the todo was deleted.
    Deleted(Todo),
    /// No todo has the requested identifier.
    Missing,
}

/// Positions involved in a reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reordered {
    /// Index of the dragged todo before the move.
    pub from: usize,
    /// Index of the dragged todo after the move.
    pub to: usize,
}

/// In-memory ordered list of todos with unique identifiers.
///
/// Equality compares the todos only, not the identifier counter.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    todos: Vec<Todo>,
    ids: TodoIdGenerator,
}

impl PartialEq for TodoList {
    fn eq(&self, other: &Self) -> bool {
        self.todos == other.todos
    }
}

impl Eq for TodoList {}

impl TodoList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a list from a persisted snapshot.
    ///
    /// Later records that repeat an identifier are dropped so the uniqueness
    /// invariant holds. New identifiers continue after the largest one loaded.
    #[must_use]
    pub fn from_persisted(todos: Vec<Todo>) -> Self {
        let mut seen = HashSet::with_capacity(todos.len());
        let mut kept = Vec::with_capacity(todos.len());
        for todo in todos {
            if seen.insert(todo.id()) {
                kept.push(todo);
            } else {
                tracing::warn!(
                    todo_id = %todo.id(),
                    "dropping persisted todo with duplicate id"
                );
            }
        }
        let ids = TodoIdGenerator::following(kept.iter().map(Todo::id));
        Self { todos: kept, ids }
    }

    /// Returns the todos in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    /// Iterates over the todos in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// Returns the number of todos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns `true` when the list holds no todos.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Finds a todo by identifier.
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    /// Returns `true` when a todo with the identifier exists.
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.position(id).is_some()
    }

    /// Returns `true` when at least one todo is completed.
    #[must_use]
    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(Todo::is_completed)
    }

    /// Counts completed todos.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_completed()).count()
    }

    /// Counts todos that are still open.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Appends a new todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTodoText`] when the trimmed text is
    /// empty. The list is left unchanged and no identifier is consumed.
    /// Returns [`TodoDomainError::IdSpaceExhausted`] when no fresh identifier
    /// remains; the list is left unchanged.
    pub fn add(&mut self, text: &str) -> Result<Todo, TodoDomainError> {
        let validated = TodoText::new(text)?;
        let id = self
            .ids
            .next_id()
            .ok_or(TodoDomainError::IdSpaceExhausted)?;
        let todo = Todo::new(id, validated);
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Flips the completion flag of the matching todo.
    pub fn toggle_completed(&mut self, id: TodoId) -> Option<&Todo> {
        let todo = self.get_mut(id)?;
        todo.toggle_completed();
        Some(&*todo)
    }

    /// Removes the matching todo and returns it.
    pub fn delete(&mut self, id: TodoId) -> Option<Todo> {
        let index = self.position(id)?;
        Some(self.todos.remove(index))
    }

    /// Removes every completed todo, keeping the survivors in order.
    pub fn clear_completed(&mut self) -> Vec<Todo> {
        let (removed, kept): (Vec<Todo>, Vec<Todo>) = std::mem::take(&mut self.todos)
            .into_iter()
            .partition(Todo::is_completed);
        self.todos = kept;
        removed
    }

    /// Puts the matching todo into edit mode.
    ///
    /// Other todos already in edit mode stay there.
    pub fn begin_edit(&mut self, id: TodoId) -> Option<&Todo> {
        let todo = self.get_mut(id)?;
        todo.begin_edit();
        Some(&*todo)
    }

    /// Commits an edit session.
    ///
    /// Text that is empty after trimming deletes the todo instead.
    pub fn finish_edit(&mut self, id: TodoId, text: &str) -> FinishedEdit {
        let Ok(validated) = TodoText::new(text) else {
            return self
                .delete(id)
                .map_or(FinishedEdit::Missing, FinishedEdit::Deleted);
        };
        match self.get_mut(id) {
            Some(todo) => {
                todo.finish_edit(validated);
                FinishedEdit::Saved(todo.clone())
            }
            None => FinishedEdit::Missing,
        }
    }

    /// Moves the dragged todo into the slot the target occupies.
    ///
    /// The dragged todo is removed first and then inserted at the target's
    /// original index, so dragging down lands after the target and dragging
    /// up lands before it. Returns `None` when either todo is missing or both
    /// identifiers name the same todo.
    pub fn reorder(&mut self, dragged: TodoId, target: TodoId) -> Option<Reordered> {
        let from = self.position(dragged)?;
        let to = self.position(target)?;
        if from == to {
            return None;
        }
        let todo = self.todos.remove(from);
        self.todos.insert(to, todo);
        Some(Reordered { from, to })
    }

    /// Returns an owned copy of the current list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id() == id)
    }

    fn get_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id() == id)
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
