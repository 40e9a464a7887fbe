use std::path::PathBuf;

use serde_json::Value;
use tokio::fs;
use tracing::info;

use super::{decode_records, SourceError};
use crate::schema::RawRecord;

// * Reads a raw listing dump from disk — the shape a headless-browser
// * collaborator writes after extracting the portal's listingData variable.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        info!(path = %self.path.display(), "Loading raw listing records");

        let body = fs::read_to_string(&self.path).await?;
        let payload: Value = serde_json::from_str(&body)?;
        let records = decode_records(payload)?;

        info!(count = records.len(), "Raw records loaded");
        Ok(records)
    }
}
