//! Dependency initialization and wiring for the importer.

use std::sync::Arc;
use tracing::info;

use crate::config::ImporterConfig;
use crate::fetcher::HttpSourceFetcher;
use crate::loader::SearchLoader;
use crate::orchestrator::{Orchestrator, OrchestratorConfig};
use crate::processor::RecordTransformer;
use crate::synthesis::DocumentServiceClient;
use crate::ImportError;
use venue_importer_repository::{IndexConfig, OpenSearchProvider};

/// Container for all initialized dependencies.
///
/// Owns the shared HTTP client and the OpenSearch client for the whole run;
/// both are released when this value is dropped.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Build every component from the given configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(ImportError)` - If a client cannot be created
    pub fn new(config: &ImporterConfig) -> Result<Self, ImportError> {
        info!(
            source_url = %config.source_url,
            document_service_url = %config.document_service_url(),
            dataset = %config.dataset,
            doc_type = %config.doc_type,
            opensearch_url = %config.opensearch_url,
            index = %config.index_name,
            concurrency = config.concurrency,
            "Initializing dependencies"
        );

        // One pooled client, shared by the source fetch and every synthesis call
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("venue-importer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ImportError::config(format!("Failed to create HTTP client: {}", e)))?;

        let fetcher = HttpSourceFetcher::new(http_client.clone(), config.source_url.clone());

        let synthesizer = DocumentServiceClient::new(
            http_client,
            &config.document_service_url(),
            &config.dataset,
            &config.doc_type,
        )
        .map_err(|e| ImportError::config(e.to_string()))?;

        let index_config = IndexConfig::new(config.index_name.clone(), config.doc_type.clone());
        let search_provider = OpenSearchProvider::new(&config.opensearch_url, index_config)
            .map_err(|e| {
                ImportError::config(format!("Failed to create OpenSearch provider: {}", e))
            })?;

        let loader = SearchLoader::new(Arc::new(search_provider));

        let orchestrator = Orchestrator::with_config(
            Arc::new(fetcher),
            RecordTransformer::new(),
            Arc::new(synthesizer),
            loader,
            OrchestratorConfig {
                concurrency: config.concurrency,
            },
        );

        Ok(Self { orchestrator })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependencies_from_default_config() {
        assert!(Dependencies::new(&ImporterConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_opensearch_url() {
        let config = ImporterConfig {
            opensearch_url: "not a url".to_string(),
            ..ImporterConfig::default()
        };

        let result = Dependencies::new(&config);
        assert!(matches!(result, Err(ImportError::ConfigError(_))));
    }
}
