//! Delimited-text reading with delimiter auto-detection.
//!
//! Produces a rectangular string table; typing and header aliasing happen
//! in the normalization pass.

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

use super::ingest_errors::IngestError;

/// Delimiters tried during auto-detection, most common first.
const CANDIDATE_DELIMITERS: [char; 4] = [',', ';', '\t', '|'];

/// Configuration for reading delimited text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvOptions {
    /// Field delimiter; `None` auto-detects.
    pub delimiter: Option<char>,
    /// Whether rows whose cells are all blank are dropped (default: true).
    pub skip_empty_rows: Option<bool>,
}

impl CsvOptions {
    pub fn skip_empty(&self) -> bool {
        self.skip_empty_rows.unwrap_or(true)
    }
}

/// An untyped table: one header row plus rectangular string rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Read delimited bytes into a rectangular string table.
///
/// The first non-empty row is the header; headers are trimmed, lowercased,
/// and space-separated words joined with underscores. Every data row must
/// match the header width exactly. A short or long row is a structural
/// defect in the upload and aborts the read with its 1-based row number.
pub fn read_csv(content: &[u8], options: &CsvOptions) -> Result<RawTable> {
    let text = decode_content(content);
    let delimiter = match options.delimiter {
        Some(explicit) => explicit,
        None => detect_delimiter(&text),
    };
    log::debug!("reading delimited input with delimiter {:?}", delimiter);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|error| IngestError::Unreadable(error.to_string()))?;
        records.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    if options.skip_empty() {
        records.retain(|row| !row.iter().all(|cell| cell.trim().is_empty()));
    }

    let mut rows = records.into_iter();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|cell| normalize_header(cell)).collect(),
        None => return Err(IngestError::MissingHeader.into()),
    };

    let mut table_rows = Vec::new();
    for (index, row) in rows.enumerate() {
        if row.len() != headers.len() {
            return Err(IngestError::RowArity {
                row: index + 1,
                expected: headers.len(),
                actual: row.len(),
            }
            .into());
        }
        table_rows.push(row);
    }

    Ok(RawTable {
        headers,
        rows: table_rows,
    })
}

/// Strip a UTF-8 BOM if present and decode, replacing invalid sequences.
fn decode_content(content: &[u8]) -> String {
    let without_bom =
        if content.len() >= 3 && content[0] == 0xEF && content[1] == 0xBB && content[2] == 0xBF {
            &content[3..]
        } else {
            content
        };
    match std::str::from_utf8(without_bom) {
        Ok(text) => text.to_string(),
        Err(error) => {
            log::warn!(
                "input is not valid UTF-8 at byte {}, replacing invalid sequences",
                error.valid_up_to()
            );
            String::from_utf8_lossy(without_bom).into_owned()
        }
    }
}

/// Pick the candidate whose per-line count is largest and most consistent
/// over the first lines of the input.
fn detect_delimiter(content: &str) -> char {
    let lines: Vec<&str> = content.lines().take(10).collect();
    let mut best = ',';
    let mut best_score = 0usize;
    for candidate in CANDIDATE_DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| line.matches(candidate).count())
            .collect();
        let Some(&first) = counts.first() else {
            continue;
        };
        if first == 0 {
            continue;
        }
        let consistent = counts.iter().filter(|&&count| count == first).count();
        let score = first * consistent;
        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }
    best
}

fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_simple_csv() {
        let content = b"campaign_id,spend\n1,100.5\n2,200";
        let table = read_csv(content, &CsvOptions::default()).unwrap();
        assert_eq!(table.headers, vec!["campaign_id", "spend"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["1", "100.5"]);
    }

    #[test]
    fn test_headers_are_normalized() {
        let content = b" Campaign ID ,Total Spend\n1,100";
        let table = read_csv(content, &CsvOptions::default()).unwrap();
        assert_eq!(table.headers, vec!["campaign_id", "total_spend"]);
    }

    #[test]
    fn test_detects_semicolon_delimiter() {
        let content = b"campaign_id;spend\n1;100\n2;200";
        let table = read_csv(content, &CsvOptions::default()).unwrap();
        assert_eq!(table.headers, vec!["campaign_id", "spend"]);
        assert_eq!(table.rows[1], vec!["2", "200"]);
    }

    #[test]
    fn test_detects_tab_and_pipe_delimiters() {
        let tab = read_csv(b"a\tb\n1\t2", &CsvOptions::default()).unwrap();
        assert_eq!(tab.headers, vec!["a", "b"]);
        let pipe = read_csv(b"a|b\n1|2", &CsvOptions::default()).unwrap();
        assert_eq!(pipe.headers, vec!["a", "b"]);
    }

    #[test]
    fn test_explicit_delimiter_wins() {
        let content = b"a;b,c\n1;2,3";
        let options = CsvOptions {
            delimiter: Some(';'),
            ..Default::default()
        };
        let table = read_csv(content, &options).unwrap();
        assert_eq!(table.headers, vec!["a", "b,c"]);
    }

    #[test]
    fn test_strips_utf8_bom() {
        let content = b"\xEF\xBB\xBFcampaign_id,spend\n1,100";
        let table = read_csv(content, &CsvOptions::default()).unwrap();
        assert_eq!(table.headers[0], "campaign_id");
    }

    #[test]
    fn test_skips_blank_rows_by_default() {
        let content = b"a,b\n1,2\n,\n3,4";
        let table = read_csv(content, &CsvOptions::default()).unwrap();
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_quoted_fields_keep_delimiters() {
        let content = b"name,note\n\"Summer Sale 2023\",\"big, splashy\"";
        let table = read_csv(content, &CsvOptions::default()).unwrap();
        assert_eq!(table.rows[0], vec!["Summer Sale 2023", "big, splashy"]);
    }

    #[test]
    fn test_short_row_is_fatal_with_row_number() {
        let content = b"a,b,c\n1,2,3\n4,5";
        let error = read_csv(content, &CsvOptions::default()).unwrap_err();
        assert!(error
            .to_string()
            .contains("row 2 has 2 fields, expected 3"));
    }

    #[test]
    fn test_long_row_is_fatal() {
        let content = b"a,b\n1,2,3";
        assert!(read_csv(content, &CsvOptions::default()).is_err());
    }

    #[test]
    fn test_empty_input_has_no_header() {
        assert!(read_csv(b"", &CsvOptions::default()).is_err());
        assert!(read_csv(b"\n\n", &CsvOptions::default()).is_err());
    }

    #[test]
    fn test_header_only_input_yields_zero_rows() {
        let table = read_csv(b"a,b\n", &CsvOptions::default()).unwrap();
        assert_eq!(table.row_count(), 0);
    }
}
