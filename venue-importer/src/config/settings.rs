//! Importer settings resolved from the environment.

use std::env;

use crate::ImportError;
use venue_importer_repository::opensearch::{DEFAULT_DOC_TYPE, DEFAULT_INDEX_NAME};

/// Default location of the Boston public schools dataset.
const DEFAULT_SOURCE_URL: &str = "https://bostonopendata-boston.opendata.arcgis.com/datasets/1d9509a8b2fd485d9ad471ba2fdb1f90_0.geojson";

/// Default document service host.
const DEFAULT_DOCUMENT_SERVICE_HOST: &str = "localhost";

/// Default document service port.
const DEFAULT_DOCUMENT_SERVICE_PORT: u16 = 5000;

/// Default dataset name the documents are attributed to.
const DEFAULT_DATASET: &str = "boston_schools";

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Default search host and port when the URL is given in parts.
const DEFAULT_ELASTICSEARCH_HOST: &str = "localhost";
const DEFAULT_ELASTICSEARCH_PORT: &str = "9200";

/// Document types the document service can synthesize.
const DOC_TYPES: [&str; 3] = ["venue", "address", "street"];

/// Resolved importer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImporterConfig {
    pub source_url: String,
    pub document_service_host: String,
    pub document_service_port: u16,
    pub dataset: String,
    pub doc_type: String,
    pub opensearch_url: String,
    pub index_name: String,
    pub concurrency: usize,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            document_service_host: DEFAULT_DOCUMENT_SERVICE_HOST.to_string(),
            document_service_port: DEFAULT_DOCUMENT_SERVICE_PORT,
            dataset: DEFAULT_DATASET.to_string(),
            doc_type: DEFAULT_DOC_TYPE.to_string(),
            opensearch_url: DEFAULT_OPENSEARCH_URL.to_string(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
            concurrency: 1,
        }
    }
}

impl ImporterConfig {
    /// Resolve the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SOURCE_URL`: GeoJSON dataset URL (default: Boston public schools)
    /// - `DOCUMENT_SERVICE_HOST`: Document service host (default: localhost)
    /// - `DOCUMENT_SERVICE_PORT`: Document service port (default: 5000)
    /// - `SYNTHESIS_DATASET`: Dataset name (default: boston_schools)
    /// - `SYNTHESIS_DOC_TYPE`: One of venue, address, street (default: venue)
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `ELASTICSEARCH_HOST` / `ELASTICSEARCH_PORT`: Used to build the search URL
    ///   when `OPENSEARCH_URL` is unset (defaults: localhost, 9200)
    /// - `INDEX_NAME`: Target index (default: pelias)
    /// - `IMPORT_CONCURRENCY`: Records in flight, at least 1 (default: 1)
    pub fn from_env() -> Result<Self, ImportError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ImportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let document_service_port = match lookup("DOCUMENT_SERVICE_PORT") {
            Some(port) => port.parse::<u16>().map_err(|_| {
                ImportError::config(format!("Invalid DOCUMENT_SERVICE_PORT: {}", port))
            })?,
            None => defaults.document_service_port,
        };

        let concurrency = match lookup("IMPORT_CONCURRENCY") {
            Some(value) => match value.parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ImportError::config(format!(
                        "Invalid IMPORT_CONCURRENCY: {} (expected an integer >= 1)",
                        value
                    )))
                }
            },
            None => defaults.concurrency,
        };

        let doc_type = lookup("SYNTHESIS_DOC_TYPE").unwrap_or(defaults.doc_type);
        if !DOC_TYPES.contains(&doc_type.as_str()) {
            return Err(ImportError::config(format!(
                "Invalid SYNTHESIS_DOC_TYPE: {} (expected one of {})",
                doc_type,
                DOC_TYPES.join(", ")
            )));
        }

        let opensearch_url = match lookup("OPENSEARCH_URL") {
            Some(url) => url,
            None => {
                let host = lookup("ELASTICSEARCH_HOST");
                let port = lookup("ELASTICSEARCH_PORT");
                if host.is_none() && port.is_none() {
                    defaults.opensearch_url
                } else {
                    format!(
                        "http://{}:{}",
                        host.as_deref().unwrap_or(DEFAULT_ELASTICSEARCH_HOST),
                        port.as_deref().unwrap_or(DEFAULT_ELASTICSEARCH_PORT)
                    )
                }
            }
        };

        Ok(Self {
            source_url: lookup("SOURCE_URL").unwrap_or(defaults.source_url),
            document_service_host: lookup("DOCUMENT_SERVICE_HOST")
                .unwrap_or(defaults.document_service_host),
            document_service_port,
            dataset: lookup("SYNTHESIS_DATASET").unwrap_or(defaults.dataset),
            doc_type,
            opensearch_url,
            index_name: lookup("INDEX_NAME").unwrap_or(defaults.index_name),
            concurrency,
        })
    }

    /// Base URL of the document service.
    pub fn document_service_url(&self) -> String {
        format!(
            "http://{}:{}",
            self.document_service_host, self.document_service_port
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ImporterConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, ImporterConfig::default());
        assert_eq!(config.document_service_url(), "http://localhost:5000");
        assert_eq!(config.dataset, "boston_schools");
        assert_eq!(config.doc_type, "venue");
        assert_eq!(config.index_name, "pelias");
        assert_eq!(config.concurrency, 1);
    }

    #[test]
    fn test_overrides() {
        let config = ImporterConfig::from_lookup(lookup(&[
            ("DOCUMENT_SERVICE_HOST", "document_service"),
            ("DOCUMENT_SERVICE_PORT", "5001"),
            ("OPENSEARCH_URL", "http://elasticsearch:9200"),
            ("IMPORT_CONCURRENCY", "4"),
        ]))
        .unwrap();

        assert_eq!(config.document_service_url(), "http://document_service:5001");
        assert_eq!(config.opensearch_url, "http://elasticsearch:9200");
        assert_eq!(config.concurrency, 4);
    }

    #[test]
    fn test_invalid_concurrency() {
        let result = ImporterConfig::from_lookup(lookup(&[("IMPORT_CONCURRENCY", "0")]));
        assert!(matches!(result, Err(ImportError::ConfigError(_))));

        let result = ImporterConfig::from_lookup(lookup(&[("IMPORT_CONCURRENCY", "many")]));
        assert!(matches!(result, Err(ImportError::ConfigError(_))));
    }

    #[test]
    fn test_doc_type_must_be_a_known_layer() {
        for doc_type in DOC_TYPES {
            let config =
                ImporterConfig::from_lookup(lookup(&[("SYNTHESIS_DOC_TYPE", doc_type)])).unwrap();
            assert_eq!(config.doc_type, doc_type);
        }

        for doc_type in ["venues", "Venue", ""] {
            let result = ImporterConfig::from_lookup(lookup(&[("SYNTHESIS_DOC_TYPE", doc_type)]));
            assert!(
                matches!(result, Err(ImportError::ConfigError(_))),
                "doc type {:?}",
                doc_type
            );
        }
    }

    #[test]
    fn test_search_url_from_host_and_port() {
        let config = ImporterConfig::from_lookup(lookup(&[
            ("ELASTICSEARCH_HOST", "elasticsearch"),
            ("ELASTICSEARCH_PORT", "9201"),
        ]))
        .unwrap();
        assert_eq!(config.opensearch_url, "http://elasticsearch:9201");

        let config =
            ImporterConfig::from_lookup(lookup(&[("ELASTICSEARCH_HOST", "elasticsearch")])).unwrap();
        assert_eq!(config.opensearch_url, "http://elasticsearch:9200");

        let config = ImporterConfig::from_lookup(lookup(&[
            ("OPENSEARCH_URL", "https://search.internal:443"),
            ("ELASTICSEARCH_HOST", "elasticsearch"),
        ]))
        .unwrap();
        assert_eq!(config.opensearch_url, "https://search.internal:443");
    }

    #[test]
    fn test_invalid_port() {
        let result = ImporterConfig::from_lookup(lookup(&[("DOCUMENT_SERVICE_PORT", "http")]));
        assert!(matches!(result, Err(ImportError::ConfigError(_))));
    }
}
