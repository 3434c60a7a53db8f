//! Error types for todo domain validation, parsing, and state transitions.

use super::{OperationState, TodoEvent};
use thiserror::Error;

/// Errors returned while constructing or mutating domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The todo text is empty after trimming.
    #[error("todo text must not be empty")]
    EmptyTodoText,

    /// Every identifier up to `u64::MAX` has already been handed out.
    #[error("no todo identifiers left to hand out")]
    IdSpaceExhausted,
}

/// An event that has no entry in the transition table for the current state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid transition from {from} on {event}")]
pub struct InvalidTransition {
    /// State the guard was in when the event arrived.
    pub from: OperationState,
    /// Event that was rejected.
    pub event: TodoEvent,
}

/// Errors returned while building a command from its wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoCommandError {
    /// The input is not a JSON command object.
    #[error("malformed command: {0}")]
    Malformed(String),

    /// The command kind is not part of the command vocabulary.
    #[error("unknown command kind: {0}")]
    UnknownKind(String),

    /// The payload does not match the fields the command kind requires.
    #[error("invalid payload for {kind}: {reason}")]
    InvalidPayload {
        /// Canonical command kind.
        kind: String,
        /// Decoder error message.
        reason: String,
    },
}

/// Error returned while parsing operation states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown operation state: {0}")]
pub struct ParseOperationStateError(pub String);

/// Error returned while parsing guard events.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown todo event: {0}")]
pub struct ParseTodoEventError(pub String);
