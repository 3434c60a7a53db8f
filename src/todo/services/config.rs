//! Dispatcher configuration.

use serde::{Deserialize, Serialize};

/// How the dispatcher reacts to an invalid guard pre-check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardPolicy {
    /// Log the violation and run the command anyway.
    #[default]
    Advisory,
    /// Reject the command before any mutation.
    Enforcing,
}

/// Dispatcher settings.
///
/// Deserializes with defaults for any missing field, so a host can load a
/// partial JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Reaction to invalid transitions.
    pub guard_policy: GuardPolicy,
    /// Whether the `editing` flag is written to the store as-is. When
    /// `false`, every todo is saved with `editing = false`.
    pub persist_editing: bool,
}

impl DispatcherConfig {
    /// Sets the guard policy.
    #[must_use]
    pub const fn with_guard_policy(mut self, guard_policy: GuardPolicy) -> Self {
        self.guard_policy = guard_policy;
        self
    }

    /// Sets whether the `editing` flag is persisted.
    #[must_use]
    pub const fn with_persist_editing(mut self, persist_editing: bool) -> Self {
        self.persist_editing = persist_editing;
        self
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            guard_policy: GuardPolicy::Advisory,
            persist_editing: true,
        }
    }
}
