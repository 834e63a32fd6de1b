//! Search index error types.
//!
//! This module defines the error type for all search index operations. The
//! variants separate failures that affect the whole backend (connection) from
//! failures that concern a single document.

use thiserror::Error;

/// Errors from search index operations.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Validation error (e.g., empty document id).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The search index backend could not be reached.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The backend refused to index a document.
    #[error("Index error: {0}")]
    IndexError(String),

    /// The document body is not valid JSON.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SearchIndexError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Whether the failure concerns the backend as a whole rather than one document.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }
}
