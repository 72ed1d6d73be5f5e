//! Relational store dataset source.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::records::{campaign_frame, sales_frame};
use crate::sources::sources_model::{RawDatasets, SourceKind};
use crate::sources::sources_traits::{
    CampaignRepositoryTrait, DatasetSource, SalesRepositoryTrait,
};
use crate::utils::DateRange;

/// Dataset source reading typed records through the repository traits.
///
/// The storage crate provides the trait implementations; this adapter only
/// turns the returned records into the contract frames.
pub struct DatabaseSource {
    campaign_repository: Arc<dyn CampaignRepositoryTrait>,
    sales_repository: Arc<dyn SalesRepositoryTrait>,
}

impl DatabaseSource {
    /// Creates a new DatabaseSource with injected repositories.
    pub fn new(
        campaign_repository: Arc<dyn CampaignRepositoryTrait>,
        sales_repository: Arc<dyn SalesRepositoryTrait>,
    ) -> Self {
        Self {
            campaign_repository,
            sales_repository,
        }
    }
}

#[async_trait]
impl DatasetSource for DatabaseSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Database
    }

    async fn fetch(&self, range: &DateRange) -> Result<RawDatasets> {
        let campaign_records = self.campaign_repository.get_campaign_records(range)?;
        let sales_records = self.sales_repository.get_sales_records(range)?;
        debug!(
            "Loaded {} campaign and {} sales records from storage",
            campaign_records.len(),
            sales_records.len()
        );

        Ok(RawDatasets {
            campaign: campaign_frame(&campaign_records)?,
            sales: sales_frame(&sales_records)?,
        })
    }
}
