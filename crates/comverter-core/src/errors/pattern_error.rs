//! Boundary pattern errors.

use super::error_code::{self, ComverterErrorCode};

/// Errors raised when a boundary pattern cannot be compiled.
///
/// These are construction-time failures: a `Boundary` is never produced
/// from a pattern that fails here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid pattern for boundary {boundary} ({pattern}): {message}")]
    InvalidPattern {
        boundary: String,
        pattern: String,
        message: String,
    },

    #[error("Pattern for boundary {boundary} exceeds the compiled size limit of {limit} bytes")]
    TooLarge { boundary: String, limit: usize },
}

impl PatternError {
    /// Name of the boundary whose pattern failed.
    pub fn boundary(&self) -> &str {
        match self {
            Self::InvalidPattern { boundary, .. } | Self::TooLarge { boundary, .. } => boundary,
        }
    }

    pub(crate) fn from_regex(boundary: &str, pattern: &str, err: regex::Error) -> Self {
        match err {
            regex::Error::CompiledTooBig(limit) => Self::TooLarge {
                boundary: boundary.to_string(),
                limit,
            },
            other => Self::InvalidPattern {
                boundary: boundary.to_string(),
                pattern: pattern.to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl ComverterErrorCode for PatternError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TooLarge { .. } => error_code::PATTERN_TOO_LARGE,
            _ => error_code::PATTERN_ERROR,
        }
    }
}
