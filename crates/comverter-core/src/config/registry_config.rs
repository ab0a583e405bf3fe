//! Registry-level configuration.

use serde::{Deserialize, Serialize};

/// Configuration for how the family registry is assembled.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// Start from the built-in families. Default: true.
    pub include_defaults: Option<bool>,
    /// Families to move to the front of the priority order, in order.
    #[serde(default)]
    pub priority: Vec<String>,
    /// Built-in families to remove after the defaults are loaded.
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl RegistryConfig {
    /// Returns whether the default families are loaded, defaulting to true.
    pub fn effective_include_defaults(&self) -> bool {
        self.include_defaults.unwrap_or(true)
    }
}
