use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::info;
use url::Url;

use super::{decode_records, SourceError};
use crate::schema::RawRecord;

// * Acquisition timeout; retry/backoff policy belongs to the caller
const FETCH_TIMEOUT_SECS: u64 = 60;

// * Fetches raw listing records from a JSON endpoint.
pub struct HttpSource {
    endpoint: Url,
    client: Client,
}

impl HttpSource {
    pub fn new(endpoint: &str) -> Result<Self, SourceError> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .gzip(true)
            .build()?;

        Ok(Self { endpoint, client })
    }

    pub async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        info!(url = %self.endpoint, "Fetching raw listing records");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;
        let payload: Value = response.json().await?;
        let records = decode_records(payload)?;

        info!(count = records.len(), "Raw records fetched");
        Ok(records)
    }
}
