//! Sources module - dataset adapters and load orchestration.
//!
//! Four adapters produce the raw campaign and sales tables: the seeded
//! sample generator, the relational store, uploaded spreadsheets, and the
//! attribution partner API. The load service tries the requested adapter,
//! substitutes sample data when the upstream is unavailable, and runs the
//! pipeline.

mod attribution;
mod database;
mod load_service;
mod sample;
mod sources_errors;
mod sources_model;
mod sources_traits;
mod spreadsheet;


#[cfg(test)]
mod load_service_tests;

pub use attribution::AttributionSource;
pub use database::DatabaseSource;
pub use load_service::LoadService;
pub use sample::SampleSource;
pub use sources_errors::SourceError;
pub use sources_model::{LoadOptions, LoadWarning, LoadedData, RawDatasets, SourceKind};
pub use sources_traits::{CampaignRepositoryTrait, DatasetSource, SalesRepositoryTrait};
pub use spreadsheet::SpreadsheetSource;
