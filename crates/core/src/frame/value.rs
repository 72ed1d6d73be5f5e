//! Cell values for analytical tables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

/// A single cell in a [`Frame`](crate::frame::Frame) column.
///
/// `Null` is the explicit missing-value marker: unparseable input, absent
/// join matches and undefined ratios stay `Null` until the final coercion
/// pass flattens numeric columns to zero. Keeping the marker distinct from
/// `Int(0)`/`Number(0)` lets callers tell "no data" from "measured zero"
/// everywhere before that boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Number(Decimal),
    Date(NaiveDate),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the cell. `Int` widens to `Decimal`; dates and text
    /// have no numeric reading.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Int(value) => Some(Decimal::from(*value)),
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Canonical key form used when grouping or joining rows.
    ///
    /// Integers and decimals unify onto a normalized `Decimal` so `1` and
    /// `1.00` land in the same bucket, and `Null` keys compare equal to each
    /// other, matching how unkeyed gaps behave in the upstream data.
    pub(crate) fn key_atom(&self) -> KeyAtom {
        match self {
            Value::Null => KeyAtom::Null,
            Value::Int(value) => KeyAtom::Number(Decimal::from(*value).normalize()),
            Value::Number(value) => KeyAtom::Number(value.normalize()),
            Value::Date(value) => KeyAtom::Date(*value),
            Value::Text(value) => KeyAtom::Text(value.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(value) => write!(f, "{}", value),
            Value::Number(value) => write!(f, "{}", value),
            Value::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            Value::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Number(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

/// Hashable join/group key component with the equality semantics above.
/// Ordering ranks nulls first, then numbers, dates, and text, giving
/// grouped output a stable row order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum KeyAtom {
    Null,
    Number(Decimal),
    Date(NaiveDate),
    Text(String),
}

/// Inferred type of a whole column, driving the numeric-coercion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Only `Int` and `Null` entries.
    Integer,
    /// At least one `Number` entry, no text or dates.
    Decimal,
    /// At least one `Date` entry, no text.
    Date,
    /// At least one `Text` entry.
    Text,
    /// Nothing but `Null` entries.
    Empty,
}

impl ColumnKind {
    /// Columns the final coercion pass is allowed to zero-fill. All-null
    /// columns count: a column that never produced a value is still a
    /// numeric column in every producing source.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Decimal | ColumnKind::Empty)
    }
}
