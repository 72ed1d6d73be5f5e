//! Derived ratio metrics computed within a single table.
//!
//! Each deriver adds a metric column only when every input column is
//! present; a missing input silently skips the metric rather than failing
//! the load. Ratios with a zero or missing denominator produce the explicit
//! missing marker, which the final coercion pass later flattens to zero.

use rust_decimal::Decimal;

use crate::constants::METRIC_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::frame::{Frame, Value};

/// Campaign-side metrics: `ctr`, `conversion_rate`, `cpa`, `roi`.
///
/// Re-deriving an already-derived table recomputes every metric from the
/// same raw columns, so derivation is idempotent. Existing columns with
/// metric names are overwritten to keep the vocabulary consistent.
pub fn derive_campaign_metrics(frame: &Frame) -> Result<Frame> {
    let mut derived = frame.clone();
    if let Some(values) = ratio_values(frame, "clicks", "impressions", Some(Decimal::ONE_HUNDRED)) {
        derived.set_column("ctr", values)?;
    }
    if let Some(values) = ratio_values(frame, "installs", "clicks", Some(Decimal::ONE_HUNDRED)) {
        derived.set_column("conversion_rate", values)?;
    }
    if let Some(values) = ratio_values(frame, "spend", "installs", None) {
        derived.set_column("cpa", values)?;
    }
    if let Some(values) = roi_values(frame) {
        derived.set_column("roi", values)?;
    }
    Ok(derived)
}

/// Sales-side metrics: `arpu`, plus the rounded `cltv` alias of
/// `lifetime_value`. The raw `lifetime_value` column is retained.
pub fn derive_sales_metrics(frame: &Frame) -> Result<Frame> {
    let mut derived = frame.clone();
    if let Some(values) = ratio_values(frame, "revenue", "users", None) {
        derived.set_column("arpu", values)?;
    }
    if let Some(column) = frame.column("lifetime_value") {
        let values = column
            .values()
            .iter()
            .map(|value| match value.as_decimal() {
                Some(ltv) => Value::Number(ltv.round_dp(METRIC_DECIMAL_PRECISION)),
                None => Value::Null,
            })
            .collect();
        derived.set_column("cltv", values)?;
    }
    Ok(derived)
}

/// Row-wise `numerator / denominator * scale`, or `None` when either column
/// is absent from the table.
fn ratio_values(
    frame: &Frame,
    numerator: &str,
    denominator: &str,
    scale: Option<Decimal>,
) -> Option<Vec<Value>> {
    let numerator = frame.column(numerator)?;
    let denominator = frame.column(denominator)?;
    Some(
        numerator
            .values()
            .iter()
            .zip(denominator.values())
            .map(|(n, d)| scaled_ratio(n.as_decimal(), d.as_decimal(), scale))
            .collect(),
    )
}

/// `(revenue - spend) / spend * 100`, or `None` when either column is
/// absent.
fn roi_values(frame: &Frame) -> Option<Vec<Value>> {
    let revenue = frame.column("revenue")?;
    let spend = frame.column("spend")?;
    Some(
        revenue
            .values()
            .iter()
            .zip(spend.values())
            .map(|(revenue, spend)| match (revenue.as_decimal(), spend.as_decimal()) {
                (Some(revenue), Some(spend)) => scaled_ratio(
                    Some(revenue - spend),
                    Some(spend),
                    Some(Decimal::ONE_HUNDRED),
                ),
                _ => Value::Null,
            })
            .collect(),
    )
}

/// One guarded, rounded ratio cell. Zero denominators mean the ratio is
/// undefined for that row, not zero.
pub(crate) fn scaled_ratio(
    numerator: Option<Decimal>,
    denominator: Option<Decimal>,
    scale: Option<Decimal>,
) -> Value {
    let (Some(numerator), Some(denominator)) = (numerator, denominator) else {
        return Value::Null;
    };
    if denominator.is_zero() {
        return Value::Null;
    }
    let mut ratio = numerator / denominator;
    if let Some(scale) = scale {
        ratio *= scale;
    }
    Value::Number(ratio.round_dp(METRIC_DECIMAL_PRECISION))
}
