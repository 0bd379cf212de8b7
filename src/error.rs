//! Error types.
//!
//! - `AppError`: what `main` reports (message + process exit code).
//! - `LoadError`: why a dataset load failed. It never escapes the load
//!   boundary; `data::load` turns it into a `LoadOutcome` message.

use thiserror::Error;

/// Exit code for usage/configuration problems.
pub const EXIT_USAGE: u8 = 2;
/// Exit code for runtime/data problems.
pub const EXIT_RUNTIME: u8 = 4;

/// What `main` reports: a message and the process exit code.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::new(EXIT_RUNTIME, err.to_string())
    }
}

/// Failure while fetching or decoding the holiday dataset.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// Timeout, connection error or non-success HTTP status.
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// Malformed JSON or missing/invalid expected fields.
    #[error("invalid holiday data: {message}")]
    Parse { message: String },
}

impl LoadError {
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        LoadError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        LoadError::Parse {
            message: message.into(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, LoadError::Network { .. })
    }
}
