//! Configuration and output of the synthetic dataset source.

use crate::constants::DEFAULT_SAMPLE_SEED;
use crate::dimensions::{Platform, Region};
use crate::frame::Frame;

/// The demo campaign roster, ids assigned by position starting at 1.
pub const DEFAULT_CAMPAIGN_NAMES: [&str; 5] = [
    "Summer Sale 2023",
    "Back to School",
    "Holiday Special",
    "New Year Promotion",
    "Spring Collection",
];

/// Knobs for the synthetic dataset source.
///
/// Equal configs over equal date ranges produce identical datasets; the
/// seed is the only source of randomness.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub seed: u64,
    pub campaign_names: Vec<String>,
    pub platforms: Vec<Platform>,
    pub regions: Vec<Region>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SAMPLE_SEED,
            campaign_names: DEFAULT_CAMPAIGN_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            platforms: Platform::ALL.to_vec(),
            regions: Region::ALL.to_vec(),
        }
    }
}

/// One generated table pair, raw measures only. Derived metrics are the
/// pipeline's job.
#[derive(Debug, Clone)]
pub struct SampleDatasets {
    pub campaign: Frame,
    pub sales: Frame,
}
