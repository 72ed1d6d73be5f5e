//! Frame module - cell values, tables, and normalization passes.

mod coerce;
mod csv_writer;
mod frame_errors;
mod frame_model;
mod value;

#[cfg(test)]
mod frame_model_tests;

#[cfg(test)]
mod coerce_tests;

pub use coerce::{coerce_numeric_to_zero, normalize_date_column, parse_date_text};
pub use csv_writer::{to_csv_string, write_csv};
pub use frame_errors::FrameError;
pub use frame_model::{Column, Frame};
pub use value::{ColumnKind, Value};

pub(crate) use value::KeyAtom;
