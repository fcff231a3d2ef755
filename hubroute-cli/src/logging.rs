//! Diagnostic logging for the CLI.
//!
//! Library crates emit records through the `log` facade. The subscriber
//! installed here captures them alongside any `tracing` events and writes to
//! stderr, leaving stdout for the JSON quote.

use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

use thiserror::Error;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    /// A global subscriber was already installed.
    #[error(transparent)]
    Install(#[from] TryInitError),
}

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
///
/// # Errors
/// Returns [`LoggingError::Filter`] when `RUST_LOG` holds an invalid
/// directive.
pub fn env_filter() -> Result<EnvFilter, LoggingError> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => Ok(EnvFilter::try_new(directives)?),
        _ => Ok(EnvFilter::try_new(DEFAULT_FILTER)?),
    }
}

/// Install the global subscriber writing to stderr.
///
/// # Errors
/// Returns [`LoggingError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init_logging() -> Result<(), LoggingError> {
    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;
    Ok(())
}
