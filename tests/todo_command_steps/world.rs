//! Shared world state for todo command BDD scenarios.

use std::sync::Arc;

use eyre::eyre;
use rstest::fixture;
use todo_machine::todo::{
    adapters::memory::{InMemoryTodoStore, RecordingPresenter},
    domain::{TodoCommand, TodoId},
    services::{DispatchReport, DispatcherConfig, TodoDispatchResult, TodoDispatcher},
};

/// Dispatcher type used by the BDD world.
pub type TestDispatcher = TodoDispatcher<InMemoryTodoStore, RecordingPresenter>;

/// Scenario world for todo command behaviour tests.
pub struct TodoWorld {
    pub store: InMemoryTodoStore,
    pub presenter: Arc<RecordingPresenter>,
    pub dispatcher: Option<TestDispatcher>,
    pub last_result: Option<TodoDispatchResult<DispatchReport>>,
}

impl TodoWorld {
    /// Creates a world with no dispatcher started yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: InMemoryTodoStore::new(),
            presenter: Arc::new(RecordingPresenter::new()),
            dispatcher: None,
            last_result: None,
        }
    }

    /// Starts the dispatcher over the current store contents.
    pub fn start(&mut self) {
        let dispatcher = run_async(TodoDispatcher::start(
            Arc::new(self.store.clone()),
            Arc::clone(&self.presenter),
            DispatcherConfig::default(),
        ));
        self.dispatcher = Some(dispatcher);
    }

    /// Returns the started dispatcher.
    ///
    /// # Errors
    ///
    /// Returns an error when no Given step has started it.
    pub fn dispatcher(&self) -> Result<&TestDispatcher, eyre::Report> {
        self.dispatcher
            .as_ref()
            .ok_or_else(|| eyre!("dispatcher not started in scenario world"))
    }

    /// Dispatches a command and records its result.
    ///
    /// # Errors
    ///
    /// Returns an error when no Given step has started the dispatcher.
    pub fn run(&mut self, command: TodoCommand) -> Result<(), eyre::Report> {
        let dispatcher = self
            .dispatcher
            .as_mut()
            .ok_or_else(|| eyre!("dispatcher not started in scenario world"))?;
        self.last_result = Some(run_async(dispatcher.dispatch(command)));
        Ok(())
    }

    /// Returns the ids of the current list in order.
    ///
    /// # Errors
    ///
    /// Returns an error when no Given step has started the dispatcher.
    pub fn order(&self) -> Result<Vec<TodoId>, eyre::Report> {
        Ok(self
            .dispatcher()?
            .todos()
            .iter()
            .map(|todo| todo.id())
            .collect())
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a comma-separated id list such as `"2,3,1"`.
///
/// # Errors
///
/// Returns an error when an entry is not a number.
pub fn parse_ids(raw: &str) -> Result<Vec<TodoId>, eyre::Report> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .map(TodoId::new)
                .map_err(|err| eyre!("invalid todo id '{part}' in scenario: {err}"))
        })
        .collect()
}
