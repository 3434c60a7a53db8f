//! In-memory snapshot store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::Todo,
    ports::{TodoStore, TodoStoreError, TodoStoreResult},
};

/// Thread-safe in-memory todo store.
///
/// Clones share the same snapshot, so a test can keep a handle while the
/// dispatcher owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    snapshot: Vec<Todo>,
    saves: usize,
}

impl InMemoryTodoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: Vec<Todo>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTodoState { snapshot, saves: 0 })),
        }
    }

    /// Returns a copy of the stored snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Todo> {
        self.state
            .read()
            .map(|guard| guard.snapshot.clone())
            .unwrap_or_default()
    }

    /// Returns how many times [`TodoStore::save`] has succeeded.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.state.read().map(|guard| guard.saves).unwrap_or(0)
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn load(&self) -> TodoStoreResult<Vec<Todo>> {
        let state = self.state.read().map_err(|err| {
            TodoStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.snapshot.clone())
    }

    async fn save(&self, snapshot: &[Todo]) -> TodoStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TodoStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.snapshot = snapshot.to_vec();
        state.saves += 1;
        Ok(())
    }
}
