//! Rendered markup kept in step with the list by the dispatcher.

use std::io;
use std::sync::Arc;

use super::helpers::{runtime, store};
use eyre::ensure;
use rstest::rstest;
use todo_machine::todo::{
    adapters::{
        memory::InMemoryTodoStore,
        template::{EMPTY_STATE_MARKUP, TemplatePresenter},
    },
    domain::{TodoCommand, TodoId},
    services::{DispatcherConfig, TodoDispatcher},
};
use tokio::runtime::Runtime;

#[rstest]
fn view_tracks_adds_edits_and_removals(
    runtime: io::Result<Runtime>,
    store: InMemoryTodoStore,
) -> eyre::Result<()> {
    let rt = runtime?;
    let presenter = Arc::new(TemplatePresenter::new()?);
    let mut dispatcher = rt.block_on(TodoDispatcher::start(
        Arc::new(store),
        Arc::clone(&presenter),
        DispatcherConfig::default(),
    ));
    ensure!(presenter.markup() == EMPTY_STATE_MARKUP);

    rt.block_on(dispatcher.dispatch(TodoCommand::add("first")))?;
    rt.block_on(dispatcher.dispatch(TodoCommand::add("second")))?;
    ensure!(presenter.view().items().len() == 2);

    rt.block_on(dispatcher.dispatch(TodoCommand::EditTodo { id: TodoId::new(2) }))?;
    let view = presenter.view();
    ensure!(view.focused() == Some(TodoId::new(2)));
    ensure!(
        view.item(TodoId::new(2))
            .is_some_and(|item| item.markup.contains("edit-input"))
    );

    rt.block_on(dispatcher.dispatch(TodoCommand::finish_edit(TodoId::new(2), "")))?;
    let after_delete = presenter.view();
    ensure!(after_delete.focused().is_none());
    ensure!(after_delete.items().len() == 1);

    rt.block_on(dispatcher.dispatch(TodoCommand::ToggleTodo { id: TodoId::new(1) }))?;
    rt.block_on(dispatcher.dispatch(TodoCommand::ClearCompleted))?;
    ensure!(presenter.markup() == EMPTY_STATE_MARKUP);
    Ok(())
}

#[rstest]
fn reorder_rerenders_in_new_order(runtime: io::Result<Runtime>) -> eyre::Result<()> {
    let rt = runtime?;
    let presenter = Arc::new(TemplatePresenter::new()?);
    let mut dispatcher = rt.block_on(TodoDispatcher::start(
        Arc::new(InMemoryTodoStore::new()),
        Arc::clone(&presenter),
        DispatcherConfig::default(),
    ));
    for text in ["one", "two", "three"] {
        rt.block_on(dispatcher.dispatch(TodoCommand::add(text)))?;
    }

    rt.block_on(dispatcher.dispatch(TodoCommand::reorder(TodoId::new(1), TodoId::new(3))))?;

    let order: Vec<u64> = presenter
        .view()
        .items()
        .iter()
        .map(|item| item.id.value())
        .collect();
    ensure!(order == vec![2, 3, 1]);
    Ok(())
}
