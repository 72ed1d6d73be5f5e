//! Output model of the processing pipeline.

use crate::combine::{CombineWarning, JoinStrategy};
use crate::frame::Frame;

/// Everything one load produces: both per-table frames with their derived
/// metrics, the unified table, and how the merge went.
#[derive(Debug, Clone)]
pub struct ProcessedData {
    /// Campaign table with its derived metric columns.
    pub campaign: Frame,
    /// Sales table with its derived metric columns.
    pub sales: Frame,
    /// Unified table from the combiner, collisions resolved.
    pub combined: Frame,
    /// How the two tables were merged.
    pub strategy: JoinStrategy,
    /// Degraded-mode events raised while combining.
    pub warnings: Vec<CombineWarning>,
}

impl ProcessedData {
    pub fn is_degraded(&self) -> bool {
        self.strategy.is_degraded()
    }
}
