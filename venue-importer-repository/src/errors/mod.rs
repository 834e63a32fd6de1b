//! Error types for the venue importer repository.

mod search_index_error;

pub use search_index_error::SearchIndexError;
