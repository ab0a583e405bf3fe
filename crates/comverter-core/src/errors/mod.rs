//! Error handling for comverter.
//! One error enum per concern, `thiserror` only.
//!
//! Matching queries never fail; errors only surface while building
//! boundaries or loading a catalogue configuration.

pub mod config_error;
pub mod error_code;
pub mod pattern_error;

pub use config_error::ConfigError;
pub use error_code::ComverterErrorCode;
pub use pattern_error::PatternError;
