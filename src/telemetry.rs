//! Logging setup for hosts that embed the dispatcher.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors returned while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Neither `RUST_LOG` nor the fallback directive is a valid filter.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Fallback directive that failed to parse.
        directive: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber has already been set.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Installs a formatting subscriber that writes to stderr.
///
/// The filter comes from `RUST_LOG` when set and valid, otherwise from
/// `default_directive` (for example `"warn"` or `"todo_machine=debug"`).
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the fallback directive does
/// not parse and [`TelemetryError::AlreadyInstalled`] on a second call.
pub fn init_tracing(default_directive: &str) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|err| TelemetryError::InvalidFilter {
            directive: default_directive.to_owned(),
            reason: err.to_string(),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInstalled)
}
