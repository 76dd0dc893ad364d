//! Application error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Chooser Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No destination selected")]
    NoDestinationSelected,

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// `NoDestinationSelected` is recovered in place: the chooser stays on
    /// screen and shows a notice. Config errors are swallowed at the store
    /// boundary. IO errors (logging setup) are not recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::NoDestinationSelected | Error::Config { .. })
    }
}
