//! Load orchestration: source fetch, sample substitution, pipeline run.

use std::sync::Arc;

use log::{debug, warn};

use crate::errors::{Error, Result};
use crate::generator::generate_sample_data;
use crate::pipeline::process;
use crate::sources::sources_model::{LoadOptions, LoadWarning, LoadedData, RawDatasets, SourceKind};
use crate::sources::sources_traits::DatasetSource;
use crate::utils::DateRange;

/// Service that turns a date window into a fully processed dataset.
///
/// The requested source is tried first. When it is unavailable and the
/// fallback is enabled, the seeded sample generator answers instead and the
/// substitution is recorded as an explicit warning; consumers always learn
/// which upstream actually produced their numbers. Structural failures in
/// data that did arrive are never substituted away.
pub struct LoadService {
    source: Arc<dyn DatasetSource>,
    options: LoadOptions,
}

impl LoadService {
    /// Creates a new LoadService reading from the given source.
    pub fn new(source: Arc<dyn DatasetSource>, options: LoadOptions) -> Self {
        Self { source, options }
    }

    /// Fetch, derive, and combine the datasets for the window.
    pub async fn load(&self, range: &DateRange) -> Result<LoadedData> {
        let requested = self.source.kind();
        let mut origin = requested;
        let mut warnings = Vec::new();

        let raw = match self.source.fetch(range).await {
            Ok(raw) => raw,
            Err(error) if self.substitutable(&error) => {
                warn!(
                    "{} source unavailable, substituting sample data: {}",
                    requested, error
                );
                warnings.push(LoadWarning::SourceSubstituted {
                    requested,
                    reason: error.to_string(),
                });
                origin = SourceKind::Sample;
                let datasets = generate_sample_data(range, &self.options.sample)?;
                RawDatasets {
                    campaign: datasets.campaign,
                    sales: datasets.sales,
                }
            }
            Err(error) => return Err(error),
        };

        debug!(
            "Processing {} campaign and {} sales rows from {} source",
            raw.campaign.row_count(),
            raw.sales.row_count(),
            origin
        );
        let data = process(raw.campaign, raw.sales, &self.options.combine)?;

        Ok(LoadedData {
            data,
            origin,
            warnings,
        })
    }

    /// Availability failures qualify for substitution; malformed data and
    /// validation failures do not.
    fn substitutable(&self, error: &Error) -> bool {
        self.options.fallback_to_sample
            && matches!(error, Error::Source(_) | Error::Database(_))
    }
}
