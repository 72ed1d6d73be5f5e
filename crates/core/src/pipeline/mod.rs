//! Pipeline module - one load from raw tables to the unified view.

mod pipeline_model;
mod processor;


pub use pipeline_model::ProcessedData;
pub use processor::process;
