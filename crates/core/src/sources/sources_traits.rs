//! Contracts between the load service, source adapters, and storage.

use async_trait::async_trait;

use crate::errors::Result;
use crate::records::{CampaignRecord, SalesRecord};
use crate::sources::sources_model::{RawDatasets, SourceKind};
use crate::utils::DateRange;

/// Contract every dataset source adapter implements.
///
/// An adapter produces raw campaign and sales tables for an inclusive date
/// window. It performs its own transport and normalization but never
/// derives metrics or combines tables; that is the pipeline's job.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Which upstream this adapter reads.
    fn kind(&self) -> SourceKind;

    /// Produce the raw campaign and sales tables for the window.
    async fn fetch(&self, range: &DateRange) -> Result<RawDatasets>;
}

/// Trait defining the contract for campaign record storage reads.
pub trait CampaignRepositoryTrait: Send + Sync {
    fn get_campaign_records(&self, range: &DateRange) -> Result<Vec<CampaignRecord>>;
}

/// Trait defining the contract for sales record storage reads.
pub trait SalesRepositoryTrait: Send + Sync {
    fn get_sales_records(&self, range: &DateRange) -> Result<Vec<SalesRecord>>;
}
