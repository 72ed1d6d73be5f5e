//! Generator module - seeded synthetic datasets for demos and fallback.

mod generator_model;
mod sample_data;


pub use generator_model::{SampleConfig, SampleDatasets, DEFAULT_CAMPAIGN_NAMES};
pub use sample_data::generate_sample_data;
