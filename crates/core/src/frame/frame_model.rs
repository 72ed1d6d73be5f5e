//! Ordered, named-column tables shared by every stage of the engine.

use std::collections::HashMap;

use super::frame_errors::FrameError;
use super::value::{ColumnKind, Value};

/// One named column of cell values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    /// Infer the column type from its entries. Text dominates dates, dates
    /// dominate numbers; an all-null column is [`ColumnKind::Empty`].
    pub fn kind(&self) -> ColumnKind {
        let mut has_int = false;
        let mut has_number = false;
        let mut has_date = false;
        for value in &self.values {
            match value {
                Value::Text(_) => return ColumnKind::Text,
                Value::Date(_) => has_date = true,
                Value::Number(_) => has_number = true,
                Value::Int(_) => has_int = true,
                Value::Null => {}
            }
        }
        if has_date {
            return ColumnKind::Date;
        }
        if has_number {
            return ColumnKind::Decimal;
        }
        if has_int {
            return ColumnKind::Integer;
        }
        ColumnKind::Empty
    }

    pub(crate) fn values_mut(&mut self) -> &mut Vec<Value> {
        &mut self.values
    }
}

/// A rectangular table: equal-length named columns in a stable order.
///
/// Column order survives every transform so downstream consumers see
/// campaign columns before sales columns in combined output. Name lookup is
/// backed by an index map kept in sync with the column vector.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    columns: Vec<Column>,
    lookup: HashMap<String, usize>,
}

impl Frame {
    /// An empty table with no columns and no rows.
    pub fn new() -> Self {
        Frame::default()
    }

    /// Build a table from `(name, values)` pairs.
    ///
    /// Fails on duplicate names or ragged column lengths; those are the
    /// "not constructible at all" inputs that abort a load.
    pub fn from_columns(
        columns: Vec<(String, Vec<Value>)>,
    ) -> std::result::Result<Self, FrameError> {
        let mut frame = Frame::new();
        let expected = columns.first().map(|(_, values)| values.len());
        for (name, values) in columns {
            if let Some(expected) = expected {
                if values.len() != expected {
                    return Err(FrameError::LengthMismatch {
                        column: name,
                        expected,
                        actual: values.len(),
                    });
                }
            }
            frame.push_column(name, values)?;
        }
        Ok(frame)
    }

    /// Number of rows; zero for a table with no columns.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.lookup.get(name).map(|&index| &self.columns[index])
    }

    /// Cell accessor; `None` when the column or row does not exist.
    pub fn value(&self, row: usize, name: &str) -> Option<&Value> {
        self.column(name).and_then(|column| column.get(row))
    }

    /// Append a new column. Fails on a duplicate name or a length that does
    /// not match the existing rows.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Value>,
    ) -> std::result::Result<(), FrameError> {
        let name = name.into();
        if self.lookup.contains_key(&name) {
            return Err(FrameError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && values.len() != self.row_count() {
            return Err(FrameError::LengthMismatch {
                column: name,
                expected: self.row_count(),
                actual: values.len(),
            });
        }
        self.lookup.insert(name.clone(), self.columns.len());
        self.columns.push(Column::new(name, values));
        Ok(())
    }

    /// Insert or replace a column, keeping its position when it already
    /// exists. Replacement values must match the row count.
    pub fn set_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Value>,
    ) -> std::result::Result<(), FrameError> {
        let name = name.into();
        match self.lookup.get(&name) {
            Some(&index) => {
                if values.len() != self.row_count() {
                    return Err(FrameError::LengthMismatch {
                        column: name,
                        expected: self.row_count(),
                        actual: values.len(),
                    });
                }
                self.columns[index] = Column::new(name, values);
                Ok(())
            }
            None => self.push_column(name, values),
        }
    }

    /// Rename a column in place. The target name must be free.
    pub fn rename_column(
        &mut self,
        from: &str,
        to: impl Into<String>,
    ) -> std::result::Result<(), FrameError> {
        let to = to.into();
        if self.lookup.contains_key(&to) {
            return Err(FrameError::DuplicateColumn(to));
        }
        let index = *self
            .lookup
            .get(from)
            .ok_or_else(|| FrameError::UnknownColumn(from.to_string()))?;
        self.lookup.remove(from);
        self.lookup.insert(to.clone(), index);
        self.columns[index] = Column::new(to, std::mem::take(self.columns[index].values_mut()));
        Ok(())
    }

    /// Project the given rows (in the given order) into a new table with the
    /// same columns.
    pub fn select_rows(&self, rows: &[usize]) -> Frame {
        let mut frame = Frame::new();
        for column in &self.columns {
            let values = rows
                .iter()
                .map(|&row| column.get(row).cloned().unwrap_or(Value::Null))
                .collect();
            // Names are unique and lengths equal by construction.
            let _ = frame.push_column(column.name().to_string(), values);
        }
        frame
    }

    pub(crate) fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.lookup
            .get(name)
            .copied()
            .map(move |index| &mut self.columns[index])
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}
