//! Overview KPIs and funnel totals over the unified table.

use rust_decimal::Decimal;

use crate::constants::METRIC_DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::frame::{Frame, Value};
use crate::reports::reports_model::{FunnelStage, OverviewKpis};

/// Funnel stage columns in order, widest first.
const FUNNEL_COLUMNS: [&str; 4] = ["impressions", "clicks", "installs", "purchases"];

/// Compute the overview dashboard headline numbers.
///
/// Errors on a table with no rows. A table that has rows but lacks a
/// metric column reports that figure as `None`.
pub fn overview_kpis(frame: &Frame) -> Result<OverviewKpis> {
    if frame.is_empty() {
        return Err(Error::Report("no rows to summarize".to_string()));
    }

    let roi = match (column_sum(frame, "revenue"), column_sum(frame, "spend")) {
        (Some(revenue), Some(spend)) if !spend.is_zero() => Some(
            ((revenue - spend) / spend * Decimal::ONE_HUNDRED)
                .round_dp(METRIC_DECIMAL_PRECISION),
        ),
        _ => None,
    };

    Ok(OverviewKpis {
        conversion_rate: column_mean(frame, "conversion_rate"),
        cpa: column_mean(frame, "cpa"),
        roi,
        total_revenue: column_sum(frame, "revenue")
            .map(|sum| sum.round_dp(METRIC_DECIMAL_PRECISION)),
    })
}

/// Ordered funnel totals with stage-to-stage conversion percentages.
///
/// Only stages whose columns exist appear. Conversions are computed
/// between consecutive present stages; a zero-valued stage leaves the next
/// conversion undefined.
pub fn funnel_stages(frame: &Frame) -> Vec<FunnelStage> {
    let mut stages: Vec<FunnelStage> = Vec::new();
    for column in FUNNEL_COLUMNS {
        let total = match column_sum(frame, column) {
            Some(total) => total,
            None => continue,
        };
        let conversion_from_previous = stages.last().and_then(|previous| {
            if previous.value.is_zero() {
                None
            } else {
                Some(
                    (total / previous.value * Decimal::ONE_HUNDRED)
                        .round_dp(METRIC_DECIMAL_PRECISION),
                )
            }
        });
        stages.push(FunnelStage {
            stage: stage_label(column),
            value: total,
            conversion_from_previous,
        });
    }
    stages
}

/// Sum of a column's numeric cells; `None` when the column is absent.
fn column_sum(frame: &Frame, name: &str) -> Option<Decimal> {
    let column = frame.column(name)?;
    Some(column.values().iter().filter_map(Value::as_decimal).sum())
}

/// Mean of a column's numeric cells; `None` when the column is absent or
/// holds no numbers.
fn column_mean(frame: &Frame, name: &str) -> Option<Decimal> {
    let column = frame.column(name)?;
    let mut total = Decimal::ZERO;
    let mut count = 0u32;
    for value in column.values() {
        if let Some(number) = value.as_decimal() {
            total += number;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    Some((total / Decimal::from(count)).round_dp(METRIC_DECIMAL_PRECISION))
}

fn stage_label(column: &str) -> String {
    let mut chars = column.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
