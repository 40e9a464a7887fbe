// * Output artifact emission.
// * The accepted listings are serialized whole as one pretty-printed JSON
// * array — the run's sole output, handed off to downstream storage.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::schema::Listing;

// * Unified error type for artifact emission.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to serialize listings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the accepted listings to `path` as pretty-printed JSON.
pub fn write_artifact(path: &Path, listings: &[Listing]) -> Result<(), ArtifactError> {
    let json = serde_json::to_string_pretty(listings)?;
    fs::write(path, json)?;

    info!(path = %path.display(), count = listings.len(), "Artifact written");
    Ok(())
}
