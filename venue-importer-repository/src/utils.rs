//! Utility functions for the venue importer repository.

use crate::errors::SearchIndexError;

/// Validate a document id before it is used in an index path.
///
/// Ids must be non-blank and must not contain a `/`, which would change the
/// request path.
///
/// # Example
///
/// ```
/// use venue_importer_repository::validate_document_id;
///
/// assert!(validate_document_id("4061").is_ok());
/// assert!(validate_document_id("  ").is_err());
/// ```
pub fn validate_document_id(document_id: &str) -> Result<(), SearchIndexError> {
    if document_id.trim().is_empty() {
        return Err(SearchIndexError::validation("document id cannot be empty"));
    }
    if document_id.contains('/') {
        return Err(SearchIndexError::validation(format!(
            "document id '{}' contains '/'",
            document_id
        )));
    }
    Ok(())
}
