//! Row slicing over produced tables.
//!
//! These helpers are pure: they never mutate the input and always hand back
//! a new table. A filter whose column is absent, or whose selection list is
//! empty, is a passthrough clone so callers can apply every dashboard
//! control unconditionally.

use crate::constants::DATE_COLUMN;
use crate::dimensions::{Platform, Region};
use crate::frame::{Frame, Value};
use crate::utils::DateRange;

/// Keep rows whose `date` falls inside the inclusive window.
///
/// Rows without a parsed date are dropped; a table with no date column
/// passes through unchanged.
pub fn filter_by_date(frame: &Frame, range: &DateRange) -> Frame {
    retain_rows(frame, DATE_COLUMN, |value| {
        value
            .as_date()
            .map(|date| range.contains(date))
            .unwrap_or(false)
    })
}

/// Keep rows whose `platform` matches one of the selected platforms.
pub fn filter_by_platforms(frame: &Frame, platforms: &[Platform]) -> Frame {
    if platforms.is_empty() {
        return frame.clone();
    }
    retain_rows(frame, "platform", |value| {
        value
            .as_text()
            .map(|text| platforms.iter().any(|platform| platform.as_str() == text))
            .unwrap_or(false)
    })
}

/// Keep rows whose `region` matches one of the selected regions.
pub fn filter_by_regions(frame: &Frame, regions: &[Region]) -> Frame {
    if regions.is_empty() {
        return frame.clone();
    }
    retain_rows(frame, "region", |value| {
        value
            .as_text()
            .map(|text| regions.iter().any(|region| region.as_str() == text))
            .unwrap_or(false)
    })
}

/// Keep rows whose `campaign_name` matches one of the selected names.
pub fn filter_by_campaigns(frame: &Frame, names: &[&str]) -> Frame {
    if names.is_empty() {
        return frame.clone();
    }
    retain_rows(frame, "campaign_name", |value| {
        value
            .as_text()
            .map(|text| names.contains(&text))
            .unwrap_or(false)
    })
}

fn retain_rows(frame: &Frame, column: &str, keep: impl Fn(&Value) -> bool) -> Frame {
    let column = match frame.column(column) {
        Some(column) => column,
        None => return frame.clone(),
    };
    let rows: Vec<usize> = column
        .values()
        .iter()
        .enumerate()
        .filter(|(_, value)| keep(value))
        .map(|(row, _)| row)
        .collect();
    frame.select_rows(&rows)
}
