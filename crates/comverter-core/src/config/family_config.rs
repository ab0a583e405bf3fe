//! Custom family definitions.

use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;
use crate::errors::PatternError;
use crate::family::Family;

/// One boundary as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryConfig {
    pub name: String,
    /// Regex for the whole line; anchors are implied.
    pub pattern: String,
}

/// A custom family, boundaries listed from most to least specific.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyConfig {
    pub name: String,
    #[serde(default)]
    pub boundaries: Vec<BoundaryConfig>,
}

impl FamilyConfig {
    /// Compile every boundary; fails on the first invalid pattern.
    pub fn build(&self) -> Result<Family, PatternError> {
        let boundaries = self
            .boundaries
            .iter()
            .map(|b| Boundary::new(b.name.clone(), &b.pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Family::new(self.name.clone(), boundaries))
    }
}
