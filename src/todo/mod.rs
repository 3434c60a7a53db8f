//! Todo list management.
//!
//! User intents arrive as [`domain::TodoCommand`] values and are run by
//! [`services::TodoDispatcher`], which checks each one against the operation
//! state machine, mutates the ordered list, saves the full snapshot, and
//! notifies the presenter. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
