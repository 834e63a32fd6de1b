//! Fetcher module for the import run.
//!
//! Retrieves the source feature collection. Any failure here is fatal for the run.

mod http_fetcher;

pub use http_fetcher::{parse_feature_collection, HttpSourceFetcher};

use async_trait::async_trait;

use crate::errors::IngestError;
use venue_importer_shared::FeatureCollection;

/// Source of the feature collection.
///
/// Production code uses [`HttpSourceFetcher`]; tests provide in-memory collections.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Fetch the whole feature collection.
    ///
    /// # Returns
    ///
    /// * `Ok(FeatureCollection)` - The parsed collection, in source order
    /// * `Err(IngestError)` - If the source is unreachable, answers non-200, or
    ///   returns a body that is not a feature collection
    async fn fetch(&self) -> Result<FeatureCollection, IngestError>;
}
