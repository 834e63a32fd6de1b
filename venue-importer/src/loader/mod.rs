//! Loader module for the import run.
//!
//! Writes synthesized documents into the search index using `UpsertDocumentRequest`.

use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

use crate::errors::IngestError;
use venue_importer_repository::{SearchIndexProvider, UpsertDocumentRequest};
use venue_importer_shared::{FailureReason, SynthesizedDocument};

/// Final state of one candidate record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The document was written to the index.
    Indexed,
    /// The record did not reach the index.
    Failed(FailureReason),
}

/// Loader that writes documents into the search index.
///
/// Writes happen one document at a time, as soon as the document is
/// synthesized. A connection failure is fatal; a document the index refuses
/// is reported as `RecordOutcome::Failed`.
pub struct SearchLoader {
    provider: Arc<dyn SearchIndexProvider>,
}

impl SearchLoader {
    /// Create a new search loader with the given provider.
    pub fn new(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self { provider }
    }

    /// Upsert `document` under `document_id`.
    #[instrument(skip(self, document))]
    pub async fn write(
        &self,
        document_id: &str,
        document: SynthesizedDocument,
    ) -> Result<RecordOutcome, IngestError> {
        let request = UpsertDocumentRequest::new(document_id, document);

        match self.provider.upsert_document(&request).await {
            Ok(()) => {
                debug!(document_id = %document_id, "Document written to search index");
                Ok(RecordOutcome::Indexed)
            }
            Err(e) if e.is_connection() => {
                error!(document_id = %document_id, error = %e, "Search index unreachable");
                Err(IngestError::loader(format!(
                    "Failed to write document {}: {}",
                    document_id, e
                )))
            }
            Err(e) => {
                warn!(document_id = %document_id, error = %e, "Search index refused document");
                Ok(RecordOutcome::Failed(FailureReason::index_write_failed(
                    e.to_string(),
                )))
            }
        }
    }

    /// Check that the search index is reachable.
    pub async fn check_ready(&self) -> Result<(), IngestError> {
        self.provider
            .ping()
            .await
            .map_err(|e| IngestError::loader(format!("Search index is not ready: {}", e)))
    }
}
