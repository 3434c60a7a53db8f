//! Port contracts for todo list management.
//!
//! Ports define infrastructure-agnostic interfaces used by the dispatcher.

pub mod presenter;
pub mod store;

pub use presenter::TodoPresenter;
pub use store::{TodoStore, TodoStoreError, TodoStoreResult};
