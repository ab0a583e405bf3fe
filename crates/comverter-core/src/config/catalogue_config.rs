//! Top-level catalogue configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FamilyConfig, RegistryConfig};
use crate::errors::ConfigError;
use crate::types::FxHashSet;

/// Environment variable naming a catalogue config file.
pub const CONFIG_ENV_VAR: &str = "COMVERTER_CONFIG";

/// Catalogue configuration, usually read from a TOML file:
///
/// ```toml
/// [registry]
/// include_defaults = true
/// priority = ["Doxygen"]
/// disabled = ["Python"]
///
/// [[families]]
/// name = "Lua"
/// boundaries = [{ name = "LuaBlockHeader", pattern = '--\[\[' }]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogueConfig {
    pub registry: RegistryConfig,
    pub families: Vec<FamilyConfig>,
}

impl CatalogueConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            kind => ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: format!("{kind}: {e}"),
            },
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            families = config.families.len(),
            "loaded catalogue config"
        );
        Ok(config)
    }

    /// Load the file named by `COMVERTER_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Validate names. Patterns are checked when the registry is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = FxHashSet::default();
        for (i, family) in self.families.iter().enumerate() {
            if family.name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("families[{i}].name"),
                    message: "must not be empty".to_string(),
                });
            }
            if !seen.insert(family.name.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("families[{i}].name"),
                    message: format!("duplicate family '{}'", family.name),
                });
            }
            for (j, boundary) in family.boundaries.iter().enumerate() {
                if boundary.name.trim().is_empty() {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("families[{i}].boundaries[{j}].name"),
                        message: "must not be empty".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialize>".to_string(),
            message: e.to_string(),
        })
    }
}
