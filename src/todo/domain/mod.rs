//! Domain model for the todo list.
//!
//! The domain holds the ordered list, its mutation rules, the command
//! vocabulary, and the operation state machine. Storage and rendering stay
//! outside the domain boundary.

mod command;
mod error;
mod ids;
mod list;
mod operation;
mod todo;

pub use command::{CommandKind, TodoCommand};
pub use error::{
    InvalidTransition, ParseOperationStateError, ParseTodoEventError, TodoCommandError,
    TodoDomainError,
};
pub use ids::{TodoId, TodoIdGenerator, TodoText};
pub use list::{FinishedEdit, Reordered, TodoList};
pub use operation::{OperationState, TodoEvent, TransitionGuard};
pub use todo::{PersistedTodoData, Todo};
