//! Source adapter errors.

use thiserror::Error;

use adlytics_attribution::errors::AttributionError;

/// Errors raised while acquiring raw data from an upstream.
///
/// Every variant means the requested upstream could not produce data at
/// all. Structural problems with data that DID arrive are ingest or frame
/// errors, which are fatal and never substituted.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The upstream could not be reached or refused to serve the request.
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// The attribution partner API failed.
    #[error("Attribution API failed: {0}")]
    Attribution(#[from] AttributionError),
}
