//! Identifier and validated scalar types for the todo domain.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a todo within one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a todo identifier from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for TodoId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic source of fresh [`TodoId`] values.
///
/// Identifiers are never reused within a session, even after the todo that
/// held one has been deleted. Once `u64::MAX` has been handed out the
/// generator is exhausted and yields nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoIdGenerator {
    next: Option<u64>,
}

impl TodoIdGenerator {
    /// Creates a generator whose first identifier is `next`.
    #[must_use]
    pub const fn starting_at(next: u64) -> Self {
        Self { next: Some(next) }
    }

    /// Creates a generator that continues after the largest existing id.
    ///
    /// When `u64::MAX` is among the existing ids the generator starts
    /// exhausted.
    #[must_use]
    pub fn following(existing: impl IntoIterator<Item = TodoId>) -> Self {
        let next = existing
            .into_iter()
            .map(TodoId::value)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self { next }
    }

    /// Hands out a fresh identifier, or `None` once the id space is used up.
    pub const fn next_id(&mut self) -> Option<TodoId> {
        let Some(current) = self.next else {
            return None;
        };
        self.next = current.checked_add(1);
        Some(TodoId(current))
    }
}

impl Default for TodoIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Non-empty, trimmed todo text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoText(String);

impl TodoText {
    /// Creates validated todo text.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTodoText`] when the value is empty
    /// after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TodoDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyTodoText);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
