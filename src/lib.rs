//! todo-machine: command-driven todo list engine.
//!
//! This crate provides the core of a task-list manager: an ordered list of
//! todos, the command vocabulary users act through, and an operation state
//! machine that tracks which command is in flight. Storage and rendering are
//! reached through ports so the same core runs against a JSON file, memory,
//! or any host view.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure list and state-machine logic with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for storage and presentation
//! - **Adapters**: Concrete implementations of ports (file, memory, templates)
//!
//! # Modules
//!
//! - [`todo`]: Todo list domain, ports, adapters, and the command dispatcher
//! - [`telemetry`]: Tracing subscriber setup for hosts

pub mod telemetry;
pub mod todo;
