//! Full outer join of the campaign and sales tables.

use std::collections::HashMap;

use crate::constants::{CAMPAIGN_COLLISION_SUFFIX, SALES_COLLISION_SUFFIX};
use crate::errors::Result;
use crate::frame::{Column, Frame, FrameError, KeyAtom, Value};

/// A merged table plus the bare names the merge had to suffix.
pub(crate) struct MergedFrame {
    pub frame: Frame,
    pub collisions: Vec<String>,
}

/// Outer-join `campaign` and `sales` on the named key columns.
///
/// Row order is deterministic: campaign rows in input order, each expanded
/// by its sales matches in input order, then unmatched sales rows in input
/// order. Key cells compare via canonical key atoms, so `Null` keys match
/// each other and `1` matches `1.00`. Output columns are the campaign
/// columns in order (keys in place) followed by the non-key sales columns;
/// name collisions get `_campaign`/`_sales` suffixes and are recorded for
/// the resolution pass.
pub(crate) fn outer_join(campaign: &Frame, sales: &Frame, key: &[String]) -> Result<MergedFrame> {
    let campaign_key = key_columns(campaign, key)?;
    let sales_key = key_columns(sales, key)?;

    let mut sales_index: HashMap<Vec<KeyAtom>, Vec<usize>> = HashMap::new();
    for row in 0..sales.row_count() {
        sales_index
            .entry(key_of(&sales_key, row))
            .or_default()
            .push(row);
    }

    let mut pairs: Vec<(Option<usize>, Option<usize>)> = Vec::new();
    let mut sales_matched = vec![false; sales.row_count()];
    for row in 0..campaign.row_count() {
        match sales_index.get(&key_of(&campaign_key, row)) {
            Some(matches) => {
                for &sales_row in matches {
                    sales_matched[sales_row] = true;
                    pairs.push((Some(row), Some(sales_row)));
                }
            }
            None => pairs.push((Some(row), None)),
        }
    }
    for (row, matched) in sales_matched.iter().enumerate() {
        if !matched {
            pairs.push((None, Some(row)));
        }
    }

    let mut frame = Frame::new();
    let mut collisions = Vec::new();

    for column in campaign.columns() {
        let name = column.name();
        let is_key = key.iter().any(|k| k == name);
        let values: Vec<Value> = pairs
            .iter()
            .map(|&(campaign_row, sales_row)| match campaign_row {
                Some(row) => column.get(row).cloned().unwrap_or(Value::Null),
                // Sales-only rows still carry their own key values.
                None if is_key => sales_row
                    .and_then(|row| sales.value(row, name).cloned())
                    .unwrap_or(Value::Null),
                None => Value::Null,
            })
            .collect();
        if !is_key && sales.has_column(name) {
            collisions.push(name.to_string());
            frame.push_column(format!("{name}{CAMPAIGN_COLLISION_SUFFIX}"), values)?;
        } else {
            frame.push_column(name.to_string(), values)?;
        }
    }

    for column in sales.columns() {
        let name = column.name();
        if key.iter().any(|k| k == name) {
            continue;
        }
        let values: Vec<Value> = pairs
            .iter()
            .map(|&(_, sales_row)| {
                sales_row
                    .and_then(|row| column.get(row).cloned())
                    .unwrap_or(Value::Null)
            })
            .collect();
        if campaign.has_column(name) {
            frame.push_column(format!("{name}{SALES_COLLISION_SUFFIX}"), values)?;
        } else {
            frame.push_column(name.to_string(), values)?;
        }
    }

    Ok(MergedFrame { frame, collisions })
}

fn key_columns<'a>(frame: &'a Frame, key: &[String]) -> Result<Vec<&'a Column>> {
    key.iter()
        .map(|name| {
            frame
                .column(name)
                .ok_or_else(|| FrameError::UnknownColumn(name.clone()).into())
        })
        .collect()
}

fn key_of(columns: &[&Column], row: usize) -> Vec<KeyAtom> {
    columns
        .iter()
        .map(|column| {
            column
                .get(row)
                .map(Value::key_atom)
                .unwrap_or(KeyAtom::Null)
        })
        .collect()
}
