//! Request types for search index operations.

use venue_importer_shared::SynthesizedDocument;

/// Request to write a synthesized document into the search index.
///
/// The document is stored whole under `document_id`; an existing document with
/// the same id is replaced.
#[derive(Debug, Clone)]
pub struct UpsertDocumentRequest {
    /// The document identifier (the source record id).
    pub document_id: String,
    /// The document body as returned by the document service.
    pub body: SynthesizedDocument,
}

impl UpsertDocumentRequest {
    pub fn new(document_id: impl Into<String>, body: SynthesizedDocument) -> Self {
        Self {
            document_id: document_id.into(),
            body,
        }
    }
}
