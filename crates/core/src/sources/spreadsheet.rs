//! Uploaded spreadsheet dataset source.

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::filters::filter_by_date;
use crate::frame::Frame;
use crate::ingest::{ensure_campaign_ids, read_csv, table_to_frame, CsvOptions};
use crate::sources::sources_errors::SourceError;
use crate::sources::sources_model::{RawDatasets, SourceKind};
use crate::sources::sources_traits::DatasetSource;
use crate::utils::DateRange;

/// Dataset source reading a campaign CSV and a sales CSV from disk.
///
/// Unreadable files are an availability problem and eligible for sample
/// substitution. Files that ARE readable but structurally broken raise
/// ingest errors, which abort the load.
pub struct SpreadsheetSource {
    campaign_path: PathBuf,
    sales_path: PathBuf,
    options: CsvOptions,
}

impl SpreadsheetSource {
    pub fn new(campaign_path: impl Into<PathBuf>, sales_path: impl Into<PathBuf>) -> Self {
        Self {
            campaign_path: campaign_path.into(),
            sales_path: sales_path.into(),
            options: CsvOptions::default(),
        }
    }

    /// Override the CSV parsing options, e.g. to pin a delimiter.
    pub fn with_options(mut self, options: CsvOptions) -> Self {
        self.options = options;
        self
    }

    fn load_table(&self, path: &PathBuf, range: &DateRange) -> Result<Frame> {
        let content = std::fs::read(path).map_err(|e| {
            SourceError::Unavailable(format!("failed to read {}: {}", path.display(), e))
        })?;

        let table = read_csv(&content, &self.options)?;
        let mut frame = table_to_frame(&table)?;
        ensure_campaign_ids(&mut frame)?;

        let frame = filter_by_date(&frame, range);
        debug!(
            "Loaded {} rows x {} columns from {}",
            frame.row_count(),
            frame.column_count(),
            path.display()
        );
        Ok(frame)
    }
}

#[async_trait]
impl DatasetSource for SpreadsheetSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Spreadsheet
    }

    async fn fetch(&self, range: &DateRange) -> Result<RawDatasets> {
        Ok(RawDatasets {
            campaign: self.load_table(&self.campaign_path, range)?,
            sales: self.load_table(&self.sales_path, range)?,
        })
    }
}
