//! Step definitions for todo command dispatch scenarios.

mod given;
mod then;
mod when;
pub mod world;
