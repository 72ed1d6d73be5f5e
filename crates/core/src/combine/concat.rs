//! Positional column-wise concatenation, the degraded combine path.

use crate::constants::{CAMPAIGN_COLLISION_SUFFIX, SALES_COLLISION_SUFFIX};
use crate::errors::Result;
use crate::frame::{Column, Frame, Value};

use super::join::MergedFrame;

/// Lay the two tables side by side: row `i` of the campaign table next to
/// row `i` of the sales table, the shorter side padded with missing
/// markers. Used when no join key exists in both inputs; row correspondence
/// is positional only, which the caller surfaces as a degraded-mode
/// warning. Collisions are suffixed exactly like the keyed path.
pub(crate) fn concat_columns(campaign: &Frame, sales: &Frame) -> Result<MergedFrame> {
    let rows = campaign.row_count().max(sales.row_count());
    let mut frame = Frame::new();
    let mut collisions = Vec::new();

    for column in campaign.columns() {
        let name = column.name();
        if sales.has_column(name) {
            collisions.push(name.to_string());
            frame.push_column(format!("{name}{CAMPAIGN_COLLISION_SUFFIX}"), padded(column, rows))?;
        } else {
            frame.push_column(name.to_string(), padded(column, rows))?;
        }
    }

    for column in sales.columns() {
        let name = column.name();
        if campaign.has_column(name) {
            frame.push_column(format!("{name}{SALES_COLLISION_SUFFIX}"), padded(column, rows))?;
        } else {
            frame.push_column(name.to_string(), padded(column, rows))?;
        }
    }

    Ok(MergedFrame { frame, collisions })
}

fn padded(column: &Column, rows: usize) -> Vec<Value> {
    (0..rows)
        .map(|row| column.get(row).cloned().unwrap_or(Value::Null))
        .collect()
}
