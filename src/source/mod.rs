// * Record acquisition boundary.
// * How raw records come into existence (page rendering, portal internals)
// * is an external collaborator's concern; what lives here is the handoff:
// * decoding the collaborator's payload into raw records, and two concrete
// * non-browser sources (a JSON dump on disk, a JSON endpoint). Acquisition
// * is the only step allowed to abort a run.

pub mod file;
pub mod http;

// * Re-exports for convenient access
pub use file::FileSource;
pub use http::HttpSource;

use serde_json::Value;
use thiserror::Error;

use crate::schema::RawRecord;

// * Unified error type for the acquisition boundary.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid source URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed listing payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Source supplied no listing records")]
    NoRecords,
}

/// Decodes the portal's `listingData` payload into raw records.
///
/// The portal ships the data either as an object keyed by listing id or as
/// a plain array; both shapes are accepted, values taken in payload order.
/// Zero decoded records is fatal: the pipeline must never emit an empty
/// artifact silently.
pub fn decode_records(payload: Value) -> Result<Vec<RawRecord>, SourceError> {
    let records: Vec<RawRecord> = match payload {
        Value::Array(items) => items.into_iter().map(RawRecord::new).collect(),
        Value::Object(map) => map.into_values().map(RawRecord::new).collect(),
        _ => Vec::new(),
    };

    if records.is_empty() {
        return Err(SourceError::NoRecords);
    }
    Ok(records)
}
