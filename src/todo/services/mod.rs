//! Application services for todo command handling.

mod config;
mod dispatcher;

pub use config::{DispatcherConfig, GuardPolicy};
pub use dispatcher::{
    DispatchReport, TodoChange, TodoDispatchError, TodoDispatchResult, TodoDispatcher,
};
