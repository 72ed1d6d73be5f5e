//! Report output shapes.

use rust_decimal::Decimal;
use serde::Serialize;

/// Headline numbers for the overview dashboard, all rounded to 2 decimal
/// places. A `None` means the unified table has no column to compute the
/// figure from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewKpis {
    /// Mean conversion rate percent across rows.
    pub conversion_rate: Option<Decimal>,
    /// Mean cost per acquisition across rows.
    pub cpa: Option<Decimal>,
    /// Portfolio return percent: (total revenue - total spend) / total
    /// spend x 100. `None` when total spend is zero.
    pub roi: Option<Decimal>,
    /// Total revenue across rows.
    pub total_revenue: Option<Decimal>,
}

/// One stage of the marketing and sales funnel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStage {
    /// Display name of the stage, e.g. "Impressions".
    pub stage: String,
    /// Sum of the stage measure across rows.
    pub value: Decimal,
    /// Percent of the previous stage's value this stage retained. `None`
    /// for the first stage and after a zero-valued stage.
    pub conversion_from_previous: Option<Decimal>,
}

/// How to aggregate one column in a grouped summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggSpec {
    pub column: String,
    pub aggregation: Aggregation,
}

impl AggSpec {
    pub fn sum(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            aggregation: Aggregation::Sum,
        }
    }

    pub fn mean(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            aggregation: Aggregation::Mean,
        }
    }
}

/// Aggregation function for grouped summaries. Both skip missing cells;
/// a group with no values at all produces a missing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Aggregation {
    Sum,
    Mean,
}
