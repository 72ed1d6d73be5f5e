//! Combine module - outer join, degraded concatenation, collision
//! resolution, and cross-table metrics.

mod collisions;
mod combine_model;
mod combiner;
mod concat;
mod join;


pub use combine_model::{CombineOptions, CombineOutput, CombineWarning, JoinStrategy, TableSide};
pub use combiner::combine;
