//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;

use crate::errors::SearchIndexError;
use crate::types::UpsertDocumentRequest;

/// Abstracts the underlying search index implementation (OpenSearch, Elasticsearch, etc.).
///
/// Implementations are injected into the importer's loader so that tests can
/// substitute an in-memory index.
///
/// # Note on Document Creation
///
/// There is no separate create operation. `upsert_document` writes the whole
/// document under its id, replacing any previous version, so re-running an
/// import leaves the index in the same state.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Check that the backend is reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the backend answered
    /// * `Err(SearchIndexError::ConnectionError)` - If it could not be reached
    async fn ping(&self) -> Result<(), SearchIndexError>;

    /// Insert or replace a document under the request's id.
    ///
    /// # Arguments
    ///
    /// * `request` - The document id and the synthesized body to store
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was written
    /// * `Err(SearchIndexError::ConnectionError)` - If the backend could not be reached
    /// * `Err(SearchIndexError)` - Any other variant if this document was refused
    async fn upsert_document(&self, request: &UpsertDocumentRequest)
        -> Result<(), SearchIndexError>;
}
