//! # Venue Importer Repository
//!
//! This crate provides the trait and implementation for writing synthesized
//! documents into the search index. It includes definitions for errors,
//! interfaces, and a concrete implementation for OpenSearch.

pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;
pub mod utils;

pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use crate::opensearch::{IndexConfig, OpenSearchProvider};
pub use types::UpsertDocumentRequest;
pub use utils::validate_document_id;
