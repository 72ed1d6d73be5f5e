//! Grouped summaries over a single dimension column.

use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::constants::{DERIVED_METRIC_COLUMNS, METRIC_DECIMAL_PRECISION};
use crate::errors::{Error, Result};
use crate::frame::{Column, Frame, KeyAtom, Value};
use crate::reports::reports_model::{AggSpec, Aggregation};

/// Group the table by one dimension column and aggregate the given
/// measures over each group.
///
/// Output rows are sorted by group key, so equal inputs always produce the
/// same summary. Missing cells are skipped; a group with no numeric cells
/// for a measure gets a missing cell in the output.
pub fn dimension_summary(frame: &Frame, dimension: &str, specs: &[AggSpec]) -> Result<Frame> {
    let dimension_column = frame
        .column(dimension)
        .ok_or_else(|| Error::Report(format!("no '{}' column to group by", dimension)))?;
    let mut measure_columns = Vec::with_capacity(specs.len());
    for spec in specs {
        let column = frame
            .column(&spec.column)
            .ok_or_else(|| Error::Report(format!("no '{}' column to aggregate", spec.column)))?;
        measure_columns.push(column);
    }

    let mut buckets: HashMap<KeyAtom, Vec<usize>> = HashMap::new();
    let mut representatives: HashMap<KeyAtom, Value> = HashMap::new();
    for (row, value) in dimension_column.values().iter().enumerate() {
        let key = value.key_atom();
        buckets.entry(key.clone()).or_default().push(row);
        representatives.entry(key).or_insert_with(|| value.clone());
    }
    let mut keys: Vec<KeyAtom> = buckets.keys().cloned().collect();
    keys.sort();

    let group_cells = keys
        .iter()
        .map(|key| representatives.get(key).cloned().unwrap_or(Value::Null))
        .collect();
    let mut summary = Frame::new();
    summary.push_column(dimension, group_cells)?;
    for (spec, column) in specs.iter().zip(&measure_columns) {
        let cells = keys
            .iter()
            .map(|key| aggregate(column, &buckets[key], spec.aggregation))
            .collect();
        summary.push_column(spec.column.clone(), cells)?;
    }
    Ok(summary)
}

/// The best campaign groups by one metric, descending, at most `n` rows.
///
/// Ratio metrics average across each campaign; raw measures sum. Campaigns
/// whose metric is entirely missing sort last.
pub fn top_campaigns(frame: &Frame, metric: &str, n: usize) -> Result<Frame> {
    let spec = if DERIVED_METRIC_COLUMNS.contains(&metric) {
        AggSpec::mean(metric)
    } else {
        AggSpec::sum(metric)
    };
    let summary = dimension_summary(frame, "campaign_name", &[spec])?;

    let mut ranked: Vec<(usize, Option<Decimal>)> = match summary.column(metric) {
        Some(column) => column.values().iter().map(Value::as_decimal).enumerate().collect(),
        None => return Ok(summary),
    };
    ranked.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    let selected: Vec<usize> = ranked.iter().take(n).map(|(row, _)| *row).collect();
    Ok(summary.select_rows(&selected))
}

fn aggregate(column: &Column, rows: &[usize], aggregation: Aggregation) -> Value {
    let mut total = Decimal::ZERO;
    let mut count = 0u32;
    for &row in rows {
        if let Some(number) = column.get(row).and_then(Value::as_decimal) {
            total += number;
            count += 1;
        }
    }
    if count == 0 {
        return Value::Null;
    }
    let result = match aggregation {
        Aggregation::Sum => total,
        Aggregation::Mean => total / Decimal::from(count),
    };
    Value::Number(result.round_dp(METRIC_DECIMAL_PRECISION))
}
