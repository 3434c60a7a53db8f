//! When steps for todo command BDD scenarios.

use super::world::TodoWorld;
use rstest_bdd_macros::when;
use todo_machine::todo::domain::{TodoCommand, TodoId};

#[when(r#"the user adds "{text}""#)]
fn user_adds(world: &mut TodoWorld, text: String) -> Result<(), eyre::Report> {
    world.run(TodoCommand::add(text))
}

#[when("the user adds a blank todo")]
fn user_adds_blank(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    world.run(TodoCommand::add("   "))
}

#[when("the user toggles todo {id:u64}")]
fn user_toggles(world: &mut TodoWorld, id: u64) -> Result<(), eyre::Report> {
    world.run(TodoCommand::ToggleTodo { id: TodoId::new(id) })
}

#[when("the user edits todo {id:u64}")]
fn user_edits(world: &mut TodoWorld, id: u64) -> Result<(), eyre::Report> {
    world.run(TodoCommand::EditTodo { id: TodoId::new(id) })
}

#[when("the user clears the text of todo {id:u64}")]
fn user_clears_text(world: &mut TodoWorld, id: u64) -> Result<(), eyre::Report> {
    world.run(TodoCommand::finish_edit(TodoId::new(id), ""))
}

#[when("the user drags todo {dragged:u64} onto todo {target:u64}")]
fn user_drags(world: &mut TodoWorld, dragged: u64, target: u64) -> Result<(), eyre::Report> {
    world.run(TodoCommand::reorder(TodoId::new(dragged), TodoId::new(target)))
}

#[when("the user clears completed todos")]
fn user_clears_completed(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    world.run(TodoCommand::ClearCompleted)
}
