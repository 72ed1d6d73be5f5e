//! End-to-end processing: derive, combine, coerce.

use crate::combine::{combine, CombineOptions, CombineOutput};
use crate::constants::DATE_COLUMN;
use crate::errors::Result;
use crate::frame::{coerce_numeric_to_zero, normalize_date_column, Frame};
use crate::metrics::{derive_campaign_metrics, derive_sales_metrics};

use super::pipeline_model::ProcessedData;

/// Run the full pipeline over one pair of input tables.
///
/// Dates are normalized first so the combiner can widen its join key, the
/// per-table derivations run in parallel (they are independent by
/// construction), and the coercion pass at the end flattens every missing
/// marker in a numeric column to zero. Between derivation and coercion the
/// markers stay in place, which keeps unmatched join rows out of the
/// derived ratios.
pub fn process(campaign: Frame, sales: Frame, options: &CombineOptions) -> Result<ProcessedData> {
    let mut campaign = campaign;
    let mut sales = sales;
    normalize_date_column(&mut campaign, DATE_COLUMN);
    normalize_date_column(&mut sales, DATE_COLUMN);

    log::debug!(
        "processing {} campaign rows and {} sales rows",
        campaign.row_count(),
        sales.row_count()
    );
    let (campaign, sales) = rayon::join(
        || derive_campaign_metrics(&campaign),
        || derive_sales_metrics(&sales),
    );
    let mut campaign = campaign?;
    let mut sales = sales?;

    let CombineOutput {
        mut frame,
        strategy,
        warnings,
    } = combine(&campaign, &sales, options)?;

    coerce_numeric_to_zero(&mut campaign);
    coerce_numeric_to_zero(&mut sales);
    coerce_numeric_to_zero(&mut frame);

    Ok(ProcessedData {
        campaign,
        sales,
        combined: frame,
        strategy,
        warnings,
    })
}
