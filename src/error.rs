//! Error types for the dashboard application.
//!
//! Data-path failures never reach this type: the loader, aggregation and
//! gallery degrade to on-screen messages. Only configuration and report
//! output can fail the process.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// Writing the JSON report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
