//! Then steps for todo command BDD scenarios.

use super::world::{TodoWorld, parse_ids};
use eyre::eyre;
use rstest_bdd_macros::then;
use todo_machine::todo::{
    adapters::memory::PresenterCall,
    domain::{OperationState, TodoDomainError, TodoId},
    services::TodoDispatchError,
};

#[then("todo {id:u64} is completed")]
fn todo_is_completed(world: &TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let completed = world
        .dispatcher()?
        .todos()
        .get(TodoId::new(id))
        .is_some_and(|todo| todo.is_completed());
    if !completed {
        return Err(eyre!("expected todo {id} to be completed"));
    }
    Ok(())
}

#[then(r#"the operation state is "{state}""#)]
fn operation_state_is(world: &TodoWorld, state: String) -> Result<(), eyre::Report> {
    let expected = OperationState::try_from(state.as_str())
        .map_err(|err| eyre!("invalid expected state in scenario: {err}"))?;
    let actual = world.dispatcher()?.state();
    if actual != expected {
        return Err(eyre!("expected state {expected}, found {actual}"));
    }
    Ok(())
}

#[then("the saved list has {count:usize} entries")]
fn saved_list_has(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let saved = world.store.snapshot().len();
    if saved != count {
        return Err(eyre!("expected {count} saved todos, found {saved}"));
    }
    Ok(())
}

#[then(r#"the list order is "{ids}""#)]
fn list_order_is(world: &TodoWorld, ids: String) -> Result<(), eyre::Report> {
    let expected = parse_ids(&ids)?;
    let actual = world.order()?;
    if actual != expected {
        return Err(eyre!("expected order {expected:?}, found {actual:?}"));
    }
    let saved: Vec<TodoId> = world.store.snapshot().iter().map(|todo| todo.id()).collect();
    if saved != expected {
        return Err(eyre!("saved order {saved:?} does not match {expected:?}"));
    }
    Ok(())
}

#[then("the view was fully redrawn")]
fn view_fully_redrawn(world: &TodoWorld) -> Result<(), eyre::Report> {
    let expected = PresenterCall::RenderAll(world.order()?);
    if world.presenter.calls().last() != Some(&expected) {
        return Err(eyre!("expected a full redraw, got {:?}", world.presenter.calls()));
    }
    Ok(())
}

#[then("the view removed todo {id:u64}")]
fn view_removed(world: &TodoWorld, id: u64) -> Result<(), eyre::Report> {
    let expected = PresenterCall::RemoveOne(TodoId::new(id));
    if !world.presenter.calls().contains(&expected) {
        return Err(eyre!("expected todo {id} to be removed from the view"));
    }
    Ok(())
}

#[then("the command fails because the text is empty")]
fn command_fails_empty_text(world: &TodoWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre!("missing dispatch result"))?;
    if !matches!(
        result,
        Err(TodoDispatchError::Domain(TodoDomainError::EmptyTodoText))
    ) {
        return Err(eyre!("expected an empty text error, got {result:?}"));
    }
    Ok(())
}
