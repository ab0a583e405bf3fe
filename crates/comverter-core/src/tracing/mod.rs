//! Observability for comverter.
//! `tracing` crate with `EnvFilter`, configured through `COMVERTER_LOG`.

pub mod setup;

pub use setup::init_tracing;
