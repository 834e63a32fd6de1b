//! Error types for the import run.
//!
//! Every variant here is fatal: it stops the run. Record-scoped failures are
//! modeled by `venue_importer_shared::FailureReason` instead.

use thiserror::Error;

/// Errors that abort an import run.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The source endpoint answered with a status other than 200.
    #[error("Source error: could not retrieve data from {url} (status {status})")]
    SourceStatus { url: String, status: u16 },

    /// The source endpoint could not be reached or its body could not be read.
    #[error("Source error: {0}")]
    SourceError(String),

    /// The source body is not a feature collection.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The document service could not be reached.
    #[error("Synthesis error: {0}")]
    SynthesisError(String),

    /// The search index could not be reached.
    #[error("Loader error: {0}")]
    LoaderError(String),
}

impl IngestError {
    /// Create a source status error.
    pub fn source_status(url: impl Into<String>, status: u16) -> Self {
        Self::SourceStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a source error.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::SourceError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a synthesis error.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::SynthesisError(msg.into())
    }

    /// Create a loader error.
    pub fn loader(msg: impl Into<String>) -> Self {
        Self::LoaderError(msg.into())
    }
}
