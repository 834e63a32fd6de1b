//! HTTP client for the document service.

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, StatusCode};
use tracing::debug;
use url::Url;

use super::{DocumentSynthesizer, SynthesisOutcome};
use crate::errors::IngestError;
use venue_importer_shared::{ParameterSet, SynthesizedDocument};

/// Client for `GET {base}/synthesize/{dataset}/{doc_type}?{params}`.
pub struct DocumentServiceClient {
    client: Client,
    endpoint: Url,
}

impl DocumentServiceClient {
    /// Create a client for the given service base URL, dataset and document type.
    ///
    /// # Arguments
    ///
    /// * `client` - The shared HTTP client
    /// * `base_url` - The service root (e.g., "http://localhost:5000")
    /// * `dataset` - The source name the documents are attributed to
    /// * `doc_type` - The layer of the documents (e.g., "venue")
    pub fn new(
        client: Client,
        base_url: &str,
        dataset: &str,
        doc_type: &str,
    ) -> Result<Self, IngestError> {
        let mut endpoint = Url::parse(base_url)
            .map_err(|e| IngestError::synthesis(format!("invalid document service URL: {}", e)))?;

        endpoint
            .path_segments_mut()
            .map_err(|_| {
                IngestError::synthesis(format!(
                    "document service URL cannot be a base: {}",
                    base_url
                ))
            })?
            .pop_if_empty()
            .extend(["synthesize", dataset, doc_type]);

        Ok(Self { client, endpoint })
    }

    /// The synthesize endpoint without query parameters.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the request URL, form-encoding the parameters as UTF-8.
    pub fn synthesis_url(&self, params: &ParameterSet) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().clear().extend_pairs(params.pairs());
        url
    }
}

#[async_trait]
impl DocumentSynthesizer for DocumentServiceClient {
    async fn synthesize(&self, params: &ParameterSet) -> Result<SynthesisOutcome, IngestError> {
        let url = self.synthesis_url(params);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                IngestError::synthesis(format!(
                    "document service request for id {} failed: {}",
                    params.id, e
                ))
            })?;

        // Reading the body consumes the response and hands the connection back to the pool.
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            IngestError::synthesis(format!(
                "could not read document service response for id {}: {}",
                params.id, e
            ))
        })?;

        debug!(record_id = %params.id, status = status.as_u16(), "Document service responded");

        if status == StatusCode::OK {
            Ok(SynthesisOutcome::Synthesized(SynthesizedDocument::new(body)))
        } else {
            Ok(SynthesisOutcome::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
