//! Boundary families.
//!
//! A family is an ordered, named collection of related comment boundaries.
//! For example, the Javadoc family includes boundaries for `/**`, `/***`,
//! `*/` and `**/`. Boundaries are ordered from most specific to least
//! specific; first-match queries stop at the earliest entry that matches.

use std::fmt;

use crate::boundary::{self, Boundary};
use crate::types::FamilyName;

/// One documentation-comment style convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    name: FamilyName,
    boundaries: Vec<Boundary>,
}

impl Family {
    pub fn new(name: impl Into<FamilyName>, boundaries: Vec<Boundary>) -> Self {
        Self {
            name: name.into(),
            boundaries,
        }
    }

    pub fn name(&self) -> &FamilyName {
        &self.name
    }

    /// Boundaries in priority order.
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// True iff any boundary in this family matches the line.
    /// An empty family matches nothing.
    pub fn matches(&self, line: &str) -> bool {
        boundary::matches_any(line, &self.boundaries)
    }

    /// The first boundary in priority order that matches the line.
    pub fn find_first_match(&self, line: &str) -> Option<&Boundary> {
        boundary::find_first_match(line, &self.boundaries)
    }

    pub fn find_all_matches(&self, line: &str) -> Vec<&Boundary> {
        boundary::find_all_matches(line, &self.boundaries)
    }

    /// Look up a boundary of this family by name.
    pub fn boundary(&self, name: &str) -> Option<&Boundary> {
        self.boundaries.iter().find(|b| b.name() == name)
    }

    pub fn into_boundaries(self) -> Vec<Boundary> {
        self.boundaries
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name)?;
        for (i, b) in self.boundaries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(b.name())?;
        }
        f.write_str("]")
    }
}
