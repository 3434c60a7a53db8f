//! In-memory adapters for tests and headless hosts.

mod presenter;
mod store;

pub use presenter::{PresenterCall, RecordingPresenter};
pub use store::InMemoryTodoStore;
