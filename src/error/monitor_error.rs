//! Startup errors that end the process.

use std::io;
use thiserror::Error;

/// Failures that prevent the monitor from running at all.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// A configuration value is missing, malformed or out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The HTTP client backing the probe could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    /// Raw mode, the alternate screen or the ratatui terminal failed.
    /// There is no headless mode, so this is fatal.
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] io::Error),

    /// The diagnostics subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl MonitorError {
    /// Shorthand for [`MonitorError::InvalidConfig`].
    pub fn invalid_config(message: impl Into<String>) -> Self {
        MonitorError::InvalidConfig(message.into())
    }
}
