//! # Venue Importer
//!
//! One-shot importer for the Boston public schools dataset. It fetches the
//! GeoJSON collection, asks the document service to synthesize a venue
//! document for every school, and writes each document into OpenSearch.
//!
//! ## Architecture
//!
//! The importer follows a Fetcher-Processor-Synthesizer-Loader pattern:
//!
//! 1. **Fetcher**: Retrieves the feature collection from the source endpoint
//! 2. **Processor**: Turns each feature into a document service parameter set
//! 3. **Synthesizer**: Requests the composed document from the document service
//! 4. **Loader**: Upserts documents into the search index
//! 5. **Orchestrator**: Coordinates the run and keeps the run summary
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`fetcher`]: Source dataset retrieval
//! - [`processor`]: Feature to parameter set transformation
//! - [`synthesis`]: Document service client
//! - [`loader`]: Index writes
//! - [`orchestrator`]: Coordinates the import run
//! - [`errors`]: Error types for the importer

pub mod config;
pub mod errors;
pub mod fetcher;
pub mod loader;
pub mod orchestrator;
pub mod processor;
pub mod synthesis;

pub use config::{Dependencies, ImporterConfig};
pub use errors::IngestError;

use thiserror::Error;

/// Errors that can occur during importer initialization or execution.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ingest error.
    #[error("Ingest error: {0}")]
    IngestError(#[from] IngestError),
}

impl ImportError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
