//! Shared data types for comverter.
//! FxHashMap re-exports and typed family/boundary names.

pub mod collections;
pub mod names;

pub use collections::{FxHashMap, FxHashSet};
pub use names::{BoundaryName, FamilyName};
