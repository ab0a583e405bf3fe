//! ComverterErrorCode trait for structured error reporting.

/// Trait for attaching a stable code to comverter errors.
/// Every error enum must implement this so callers (CLI front ends,
/// pipeline diagnostics) can match on a code instead of a message.
pub trait ComverterErrorCode {
    /// Returns the error code string (e.g., "PATTERN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const PATTERN_ERROR: &str = "PATTERN_ERROR";
pub const PATTERN_TOO_LARGE: &str = "PATTERN_TOO_LARGE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
