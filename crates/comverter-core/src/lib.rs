//! comverter-core: comment boundary classification engine
//!
//! Given a single line of source text, decides whether the line is a
//! documentation-comment delimiter (a header or footer) and which style
//! family it belongs to:
//! - Boundary: one named, whole-line anchored delimiter pattern
//! - Family: an ordered set of boundaries for one comment style
//! - Registry: the family catalogue with deterministic priority
//! - Defaults: the compiled-in Javadoc, CBlock, SingleLine, Doxygen, Python and Hash families
//! - Config: TOML catalogue customization
//!
//! Walking files, extracting comment bodies and re-emitting them belong to
//! the conversion pipeline, not to this crate.

pub mod boundary;
pub mod config;
pub mod defaults;
pub mod errors;
pub mod family;
pub mod registry;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use boundary::{
    find_all_matches, find_first_match, is_single_line_comment_marker, matches_any, Boundary,
};
pub use config::{BoundaryConfig, CatalogueConfig, FamilyConfig, RegistryConfig};
pub use defaults::verify_defaults;
pub use errors::{ComverterErrorCode, ConfigError, PatternError};
pub use family::Family;
pub use registry::{Classification, FamilyMatch, FamilyRegistry, MatchReport};
pub use types::{BoundaryName, FamilyName};
