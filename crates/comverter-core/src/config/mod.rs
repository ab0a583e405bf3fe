//! Configuration system for comverter.
//! TOML-based catalogue configuration: which default families to keep,
//! extra families to register, and the family priority order.

pub mod catalogue_config;
pub mod family_config;
pub mod registry_config;

pub use catalogue_config::CatalogueConfig;
pub use family_config::{BoundaryConfig, FamilyConfig};
pub use registry_config::RegistryConfig;
