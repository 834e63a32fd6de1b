//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust crate.

use async_trait::async_trait;
use opensearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    IndexParts, OpenSearch,
};
use serde_json::value::RawValue;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::index_config::IndexConfig;
use crate::types::UpsertDocumentRequest;
use crate::utils;

/// OpenSearch provider implementation.
///
/// Holds one client (and its connection pool) for the lifetime of the run.
///
/// # Example
///
/// ```ignore
/// use venue_importer_repository::{IndexConfig, OpenSearchProvider, UpsertDocumentRequest};
/// use venue_importer_shared::SynthesizedDocument;
///
/// let provider = OpenSearchProvider::new("http://localhost:9200", IndexConfig::default())?;
/// let request = UpsertDocumentRequest::new("4061", SynthesizedDocument::new(r#"{"name":"x"}"#));
/// provider.upsert_document(&request).await?;
/// ```
pub struct OpenSearchProvider {
    client: OpenSearch,
    index_config: IndexConfig,
}

impl OpenSearchProvider {
    /// Create a new OpenSearch provider for the specified URL.
    ///
    /// No request is sent; use [`SearchIndexProvider::ping`] to check the connection.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    /// * `index_config` - The target index
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the URL is invalid or the transport cannot be built
    pub fn new(url: &str, index_config: IndexConfig) -> Result<Self, SearchIndexError> {
        let parsed_url =
            Url::parse(url).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %url,
            index = %index_config.index,
            doc_type = %index_config.doc_type,
            "Created OpenSearch provider"
        );

        Ok(Self {
            client,
            index_config,
        })
    }

    /// The configured target index.
    pub fn index_config(&self) -> &IndexConfig {
        &self.index_config
    }

    /// Wrap the synthesized body so it is sent as-is.
    ///
    /// The body is checked to be JSON but otherwise not interpreted.
    fn raw_body(request: &UpsertDocumentRequest) -> Result<Box<RawValue>, SearchIndexError> {
        RawValue::from_string(request.body.as_str().to_string())
            .map_err(|e| SearchIndexError::serialization(e.to_string()))
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchProvider {
    async fn ping(&self) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            return Err(SearchIndexError::connection(format!(
                "Ping failed with status {}",
                status
            )));
        }

        debug!("OpenSearch ping succeeded");
        Ok(())
    }

    /// Insert or replace a document using the index API.
    ///
    /// Transport failures map to `ConnectionError`; a non-success status maps
    /// to `IndexError` with the response body.
    async fn upsert_document(
        &self,
        request: &UpsertDocumentRequest,
    ) -> Result<(), SearchIndexError> {
        utils::validate_document_id(&request.document_id)?;
        let body = Self::raw_body(request)?;

        let response = self
            .client
            .index(IndexParts::IndexId(
                &self.index_config.index,
                &request.document_id,
            ))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                doc_id = %request.document_id,
                body = %error_body,
                "Index request failed"
            );
            return Err(SearchIndexError::index(format!(
                "Index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(doc_id = %request.document_id, "Document indexed");
        Ok(())
    }
}
