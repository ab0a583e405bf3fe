//! Configuration errors.

use super::error_code::{self, ComverterErrorCode};
use super::PatternError;

/// Errors that can occur during catalogue configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config file {path} could not be read: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid boundary in config: {0}")]
    Pattern(#[from] PatternError),
}

impl ComverterErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Pattern(e) => e.error_code(),
            _ => error_code::CONFIG_ERROR,
        }
    }
}
