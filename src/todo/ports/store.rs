//! Persistence port for whole-list snapshots.

use crate::todo::domain::Todo;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo store operations.
pub type TodoStoreResult<T> = Result<T, TodoStoreError>;

/// Snapshot persistence contract.
///
/// The store only ever sees the full ordered list; there are no per-item
/// operations.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Loads the last saved snapshot.
    ///
    /// Returns an empty list when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Decode`] when stored data cannot be decoded
    /// or [`TodoStoreError::Persistence`] when the backend fails.
    async fn load(&self) -> TodoStoreResult<Vec<Todo>>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError`] when the snapshot cannot be encoded or
    /// written.
    async fn save(&self, snapshot: &[Todo]) -> TodoStoreResult<()>;
}

/// Errors returned by todo store implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoStoreError {
    /// Stored data is not a valid todo list.
    #[error("stored todo list could not be decoded: {0}")]
    Decode(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
