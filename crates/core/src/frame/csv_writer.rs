//! CSV export for produced tables.

use std::io::Write;

use crate::errors::{Error, Result};

use super::frame_model::Frame;

/// Write a table as RFC 4180 CSV: a header row, then one record per row.
/// Missing markers render as empty fields, dates as ISO-8601.
pub fn write_csv<W: Write>(frame: &Frame, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(frame.column_names())?;
    for row in 0..frame.row_count() {
        let record: Vec<String> = frame
            .columns()
            .iter()
            .map(|column| column.get(row).map(ToString::to_string).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// In-memory CSV rendering, used by download-style consumers.
pub fn to_csv_string(frame: &Frame) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(frame, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| Error::Unexpected(err.to_string()))
}
