//! Derived match results: classification and diagnostic reports.

use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;
use crate::family::Family;
use crate::types::{BoundaryName, FamilyName};

/// The family and boundary a line was identified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'r> {
    pub family: &'r Family,
    pub boundary: &'r Boundary,
}

impl Classification<'_> {
    pub fn family_name(&self) -> &FamilyName {
        self.family.name()
    }

    pub fn boundary_name(&self) -> &BoundaryName {
        self.boundary.name()
    }
}

/// One family's share of a match report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMatch {
    pub family: FamilyName,
    /// Matching boundaries, in family order.
    pub boundaries: Vec<BoundaryName>,
}

/// Diagnostic record of every family and boundary matching a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub line: String,
    /// Highest-priority matching family.
    pub winner: Option<FamilyName>,
    /// First matching boundary of the winner.
    pub boundary: Option<BoundaryName>,
    /// All matching families, in priority order.
    pub matches: Vec<FamilyMatch>,
}

impl MatchReport {
    pub fn is_match(&self) -> bool {
        self.winner.is_some()
    }

    /// More than one family claims the line.
    pub fn is_ambiguous(&self) -> bool {
        self.matches.len() > 1
    }
}
