//! Errors raised while reading delimited input.

use thiserror::Error;

/// Structural problems in uploaded spreadsheet data.
///
/// These abort the load. Cell-level oddities (unparseable numbers, unknown
/// platforms) never land here; they degrade to missing markers or catch-all
/// categories during normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("input has no header row")]
    MissingHeader,

    #[error("row {row} has {actual} fields, expected {expected}")]
    RowArity {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column '{0}' after header normalization")]
    DuplicateHeader(String),

    #[error("unreadable delimited input: {0}")]
    Unreadable(String),
}
