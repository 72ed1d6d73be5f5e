//! Header aliasing and cell typing for ingested tables.
//!
//! Turns a rectangular string table into a typed frame honoring the column
//! contract: aliased headers are renamed, count columns parse as integers,
//! money columns as decimals, platforms and regions collapse onto their
//! canonical sets, and blank or unparseable cells become missing markers.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::constants::{
    CAMPAIGN_MEASURE_COLUMNS, COUNT_COLUMNS, DATE_COLUMN, DERIVED_METRIC_COLUMNS,
    PRIMARY_KEY_COLUMN, SALES_MEASURE_COLUMNS,
};
use crate::dimensions::{region_for_country, Platform, Region};
use crate::errors::Result;
use crate::frame::{parse_date_text, Frame, Value};

use super::csv_reader::RawTable;
use super::ingest_errors::IngestError;

/// Source-specific spellings mapped onto the canonical column contract.
const HEADER_ALIASES: &[(&str, &str)] = &[
    ("cost", "spend"),
    ("geo", "region"),
    ("campaign", "campaign_name"),
];

/// Canonical name for a normalized header.
pub fn canonical_header(name: &str) -> &str {
    HEADER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

/// Type a raw table into a frame.
///
/// Two different headers aliasing onto the same canonical name is a
/// structural defect and aborts the load.
pub fn table_to_frame(table: &RawTable) -> Result<Frame> {
    let mut frame = Frame::new();
    for (index, header) in table.headers.iter().enumerate() {
        let name = canonical_header(header);
        if frame.has_column(name) {
            return Err(IngestError::DuplicateHeader(name.to_string()).into());
        }
        let cells: Vec<&str> = table.rows.iter().map(|row| row[index].as_str()).collect();
        frame.push_column(name.to_string(), typed_values(name, &cells))?;
    }
    Ok(frame)
}

/// Guarantee a usable id column on a frame that may have come without one.
///
/// Ids are assigned in first-seen order of `campaign_name`, starting at 1;
/// without a name column they follow row order. An id column with at least
/// one parsed entry is left untouched.
pub fn ensure_campaign_ids(frame: &mut Frame) -> Result<()> {
    let needs_ids = match frame.column(PRIMARY_KEY_COLUMN) {
        Some(column) => column.values().iter().all(Value::is_null),
        None => frame.column_count() > 0,
    };
    if !needs_ids {
        return Ok(());
    }

    let rows = frame.row_count();
    let ids: Vec<Value> = match frame.column("campaign_name") {
        Some(names) => {
            let mut seen: HashMap<String, i64> = HashMap::new();
            let mut next = 1i64;
            names
                .values()
                .iter()
                .map(|value| {
                    let key = value.as_text().unwrap_or_default().to_string();
                    let id = *seen.entry(key).or_insert_with(|| {
                        let assigned = next;
                        next += 1;
                        assigned
                    });
                    Value::Int(id)
                })
                .collect()
        }
        None => (1..=rows as i64).map(Value::Int).collect(),
    };
    log::debug!("synthesized campaign ids for {} rows", rows);
    frame.set_column(PRIMARY_KEY_COLUMN, ids)?;
    Ok(())
}

fn typed_values(name: &str, cells: &[&str]) -> Vec<Value> {
    match name {
        PRIMARY_KEY_COLUMN => cells.iter().map(|cell| int_value(cell)).collect(),
        DATE_COLUMN => cells.iter().map(|cell| date_value(cell)).collect(),
        "platform" => cells.iter().map(|cell| platform_value(cell)).collect(),
        "region" => cells.iter().map(|cell| region_value(cell)).collect(),
        "campaign_name" => cells.iter().map(|cell| text_value(cell)).collect(),
        _ if COUNT_COLUMNS.contains(&name) => cells.iter().map(|cell| int_value(cell)).collect(),
        _ if is_decimal_column(name) => cells.iter().map(|cell| decimal_value(cell)).collect(),
        _ => infer_values(cells),
    }
}

/// Contract measures that are not counts parse as decimals, as do all the
/// derived metric columns when a source ships them pre-computed.
fn is_decimal_column(name: &str) -> bool {
    let measure =
        CAMPAIGN_MEASURE_COLUMNS.contains(&name) || SALES_MEASURE_COLUMNS.contains(&name);
    (measure && !COUNT_COLUMNS.contains(&name)) || DERIVED_METRIC_COLUMNS.contains(&name)
}

fn text_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        Value::Null
    } else {
        Value::Text(trimmed.to_string())
    }
}

fn int_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::Int(int);
    }
    // Counts exported as "1234.0" still parse, fractions truncate.
    match parse_decimal_tolerant(trimmed) {
        Some(decimal) => decimal.trunc().to_i64().map(Value::Int).unwrap_or(Value::Null),
        None => Value::Null,
    }
}

fn decimal_value(cell: &str) -> Value {
    parse_decimal_tolerant(cell)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn date_value(cell: &str) -> Value {
    parse_date_text(cell).map(Value::Date).unwrap_or(Value::Null)
}

fn platform_value(cell: &str) -> Value {
    Value::Text(Platform::canonicalize(cell.trim()).to_string())
}

/// Full region names resolve directly; two-letter country codes go through
/// the geo table. Everything else is `Other`.
fn region_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    let region = match Region::canonicalize(trimmed) {
        Region::Other => region_for_country(trimmed),
        region => region,
    };
    Value::Text(region.to_string())
}

/// Money-style tolerant decimal parse: currency symbols, thousands
/// separators, and percent signs are cosmetic; scientific notation falls
/// back through f64.
fn parse_decimal_tolerant(cell: &str) -> Option<Decimal> {
    let cleaned = cell.trim().trim_start_matches('$').replace(',', "");
    let cleaned = cleaned.trim_end_matches('%');
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(decimal) = Decimal::from_str(cleaned) {
        return Some(decimal);
    }
    cleaned.parse::<f64>().ok().and_then(Decimal::from_f64)
}

/// Column-level inference for names outside the contract: an all-integer
/// column becomes Int, all-numeric becomes Number, all-date becomes Date,
/// anything mixed stays text.
fn infer_values(cells: &[&str]) -> Vec<Value> {
    let non_empty: Vec<&str> = cells
        .iter()
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .collect();
    if non_empty.is_empty() {
        return cells.iter().map(|cell| text_value(cell)).collect();
    }
    if non_empty.iter().all(|cell| cell.parse::<i64>().is_ok()) {
        return cells.iter().map(|cell| int_value(cell)).collect();
    }
    if non_empty
        .iter()
        .all(|cell| parse_decimal_tolerant(cell).is_some())
    {
        return cells.iter().map(|cell| decimal_value(cell)).collect();
    }
    if non_empty.iter().all(|cell| parse_date_text(cell).is_some()) {
        return cells.iter().map(|cell| date_value(cell)).collect();
    }
    cells.iter().map(|cell| text_value(cell)).collect()
}
