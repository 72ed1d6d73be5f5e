//! Column-level normalization passes.
//!
//! Two passes run around the combiner: date normalization before the join so
//! key equality works on calendar dates rather than strings, and the final
//! numeric-coercion pass that flattens every remaining missing marker in a
//! numeric column to zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::frame_model::Frame;
use super::value::{ColumnKind, Value};

/// Text date shapes accepted from spreadsheet and API sources, tried in
/// order. Timestamps contribute their date part.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse one textual date cell. `None` marks an unparseable entry; it stays
/// a missing marker rather than failing the load.
pub fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Rewrite a column to canonical `Value::Date` entries.
///
/// Existing dates pass through, text is parsed against the accepted formats,
/// and anything else becomes `Null`. A missing column is a no-op: sources
/// without a date column are still combinable on the reduced key.
pub fn normalize_date_column(frame: &mut Frame, name: &str) {
    let Some(column) = frame.column_mut(name) else {
        return;
    };
    for value in column.values_mut() {
        let normalized = match value {
            Value::Date(date) => Value::Date(*date),
            Value::Text(text) => match parse_date_text(text) {
                Some(date) => Value::Date(date),
                None => Value::Null,
            },
            _ => Value::Null,
        };
        *value = normalized;
    }
}

/// Final numeric-coercion pass: every numeric-kind column loses its missing
/// markers.
///
/// Integer columns fill with `Int(0)`; decimal and all-null columns fill
/// with `Number(0)`, and mixed integer entries in decimal columns widen to
/// `Number` so a coerced column is uniformly typed. Date and text columns
/// are left untouched.
pub fn coerce_numeric_to_zero(frame: &mut Frame) {
    let names: Vec<String> = frame
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    for name in names {
        let Some(column) = frame.column_mut(&name) else {
            continue;
        };
        match column.kind() {
            ColumnKind::Integer => {
                for value in column.values_mut() {
                    if value.is_null() {
                        *value = Value::Int(0);
                    }
                }
            }
            ColumnKind::Decimal | ColumnKind::Empty => {
                for value in column.values_mut() {
                    let widened = match value {
                        Value::Null => Value::Number(Decimal::ZERO),
                        Value::Int(int) => Value::Number(Decimal::from(*int)),
                        other => other.clone(),
                    };
                    *value = widened;
                }
            }
            ColumnKind::Date | ColumnKind::Text => {}
        }
    }
}
