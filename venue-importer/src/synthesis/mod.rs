//! Synthesis module for the import run.
//!
//! Requests composed venue documents from the document service.

mod document_service;

pub use document_service::DocumentServiceClient;

use async_trait::async_trait;

use crate::errors::IngestError;
use venue_importer_shared::{ParameterSet, SynthesizedDocument};

/// Answer of the document service for one parameter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisOutcome {
    /// Status 200: the body is the document to index.
    Synthesized(SynthesizedDocument),
    /// Any other status: the body is a diagnostic.
    Rejected { status: u16, body: String },
}

/// Document synthesis backend.
#[async_trait]
pub trait DocumentSynthesizer: Send + Sync {
    /// Request a document for `params`.
    ///
    /// A rejection by the service is an `Ok(SynthesisOutcome::Rejected)`; only
    /// failing to reach the service is an error.
    async fn synthesize(&self, params: &ParameterSet) -> Result<SynthesisOutcome, IngestError>;
}
