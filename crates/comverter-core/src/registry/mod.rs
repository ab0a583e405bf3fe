//! Family registry: the catalogue of boundary families and the
//! catalogue-level queries over it.

pub mod family_registry;
pub mod report;

pub use family_registry::FamilyRegistry;
pub use report::{Classification, FamilyMatch, MatchReport};
