//! Adlytics Core - Tabular frames, the combination pipeline, and reports.
//!
//! This crate contains the core analytics logic for Adlytics.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod combine;
pub mod constants;
pub mod dimensions;
pub mod errors;
pub mod filters;
pub mod frame;
pub mod generator;
pub mod ingest;
pub mod metrics;
pub mod pipeline;
pub mod records;
pub mod reports;
pub mod sources;
pub mod utils;

// Re-export common types from frame and pipeline modules
pub use frame::*;
pub use pipeline::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
