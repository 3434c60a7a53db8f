//! Given steps for todo command BDD scenarios.

use super::world::TodoWorld;
use rstest_bdd_macros::given;
use todo_machine::todo::{
    adapters::memory::InMemoryTodoStore,
    domain::{PersistedTodoData, Todo, TodoId},
};

#[given("an empty todo list")]
fn empty_todo_list(world: &mut TodoWorld) {
    world.start();
}

#[given(r#"the todos "{texts}""#)]
fn seeded_todos(world: &mut TodoWorld, texts: String) {
    let todos = texts
        .split(',')
        .zip(1_u64..)
        .map(|(text, id)| {
            Todo::from_persisted(PersistedTodoData {
                id: TodoId::new(id),
                text: text.trim().to_owned(),
                completed: false,
                editing: false,
            })
        })
        .collect();
    world.store = InMemoryTodoStore::with_snapshot(todos);
    world.start();
}
