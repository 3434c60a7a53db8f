//! Adapter implementations for todo ports.

pub mod file;
pub mod memory;
pub mod template;
