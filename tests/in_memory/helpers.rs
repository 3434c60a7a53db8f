//! Shared helpers for in-memory dispatcher integration tests.

use std::io;
use std::sync::Arc;

use rstest::fixture;
use todo_machine::todo::{
    adapters::memory::{InMemoryTodoStore, RecordingPresenter},
    domain::{PersistedTodoData, Todo, TodoId},
    services::{DispatcherConfig, TodoDispatcher},
};
use tokio::runtime::Runtime;

/// Dispatcher wired to the in-memory adapters.
pub type TestDispatcher = TodoDispatcher<InMemoryTodoStore, RecordingPresenter>;

/// A started dispatcher plus handles onto its adapters.
pub struct Session {
    /// The dispatcher under test.
    pub dispatcher: TestDispatcher,
    /// Handle sharing the dispatcher's store.
    pub store: InMemoryTodoStore,
    /// Handle sharing the dispatcher's presenter.
    pub presenter: Arc<RecordingPresenter>,
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh, empty in-memory store.
#[fixture]
pub fn store() -> InMemoryTodoStore {
    InMemoryTodoStore::new()
}

/// Builds a stored todo record.
#[must_use]
pub fn stored_todo(id: u64, text: &str, completed: bool) -> Todo {
    Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        text: text.to_owned(),
        completed,
        editing: false,
    })
}

/// Starts a dispatcher over `store` with a fresh recording presenter.
pub fn start_session(
    runtime: &Runtime,
    store: &InMemoryTodoStore,
    config: DispatcherConfig,
) -> Session {
    let presenter = Arc::new(RecordingPresenter::new());
    let dispatcher = runtime.block_on(TodoDispatcher::start(
        Arc::new(store.clone()),
        Arc::clone(&presenter),
        config,
    ));
    Session {
        dispatcher,
        store: store.clone(),
        presenter,
    }
}

/// Returns the texts of `todos` in order.
#[must_use]
pub fn texts(todos: &[Todo]) -> Vec<String> {
    todos.iter().map(|todo| todo.text().to_owned()).collect()
}
