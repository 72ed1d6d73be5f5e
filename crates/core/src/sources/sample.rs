//! Seeded synthetic dataset source.

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::generator::{generate_sample_data, SampleConfig};
use crate::sources::sources_model::{RawDatasets, SourceKind};
use crate::sources::sources_traits::DatasetSource;
use crate::utils::DateRange;

/// Dataset source backed by the seeded sample generator.
///
/// Serves demo installs and answers substitutions when a real source is
/// unavailable. Equal configs over equal windows produce identical tables.
#[derive(Debug, Clone, Default)]
pub struct SampleSource {
    config: SampleConfig,
}

impl SampleSource {
    pub fn new(config: SampleConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DatasetSource for SampleSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Sample
    }

    async fn fetch(&self, range: &DateRange) -> Result<RawDatasets> {
        debug!(
            "Generating sample datasets for {} through {} with seed {}",
            range.start, range.end, self.config.seed
        );
        let datasets = generate_sample_data(range, &self.config)?;
        Ok(RawDatasets {
            campaign: datasets.campaign,
            sales: datasets.sales,
        })
    }
}
