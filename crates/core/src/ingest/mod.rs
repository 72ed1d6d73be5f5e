//! Ingest module - delimited-text reading and table normalization.

mod csv_reader;
mod ingest_errors;
mod normalize;


pub use csv_reader::{read_csv, CsvOptions, RawTable};
pub use ingest_errors::IngestError;
pub use normalize::{canonical_header, ensure_campaign_ids, table_to_frame};
