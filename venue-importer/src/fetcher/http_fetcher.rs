//! HTTP implementation of the source fetcher.

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, StatusCode};
use tracing::{debug, info, instrument};

use super::SourceFetcher;
use crate::errors::IngestError;
use venue_importer_shared::FeatureCollection;

/// Fetches the GeoJSON collection with a single GET.
pub struct HttpSourceFetcher {
    client: Client,
    url: String,
}

impl HttpSourceFetcher {
    /// Create a fetcher for `url` that uses the shared HTTP client.
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl SourceFetcher for HttpSourceFetcher {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<FeatureCollection, IngestError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                IngestError::source(format!("could not retrieve data from {}: {}", self.url, e))
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(IngestError::source_status(&self.url, status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            IngestError::source(format!("could not read body from {}: {}", self.url, e))
        })?;
        debug!(bytes = body.len(), "Received source body");

        let collection = parse_feature_collection(&body)?;
        info!(feature_count = collection.len(), "Fetched source features");
        Ok(collection)
    }
}

/// Parse a source body as a feature collection.
pub fn parse_feature_collection(body: &[u8]) -> Result<FeatureCollection, IngestError> {
    serde_json::from_slice(body)
        .map_err(|e| IngestError::parse(format!("source body is not a feature collection: {}", e)))
}
