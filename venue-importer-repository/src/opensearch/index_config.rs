//! OpenSearch index configuration.

/// The default index name venues are written to.
pub const DEFAULT_INDEX_NAME: &str = "pelias";

/// The default document type (layer) of imported venues.
pub const DEFAULT_DOC_TYPE: &str = "venue";

/// Configuration for the target index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// The index documents are written to.
    pub index: String,
    /// The document type. OpenSearch indices are typeless, so this is only
    /// reported; the document service embeds the layer in the body.
    pub doc_type: String,
}

impl IndexConfig {
    /// Create a new index configuration.
    ///
    /// # Arguments
    ///
    /// * `index` - The index name
    /// * `doc_type` - The document type
    pub fn new(index: impl Into<String>, doc_type: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            doc_type: doc_type.into(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_NAME, DEFAULT_DOC_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_index_config() {
        let config = IndexConfig::default();
        assert_eq!(config.index, "pelias");
        assert_eq!(config.doc_type, "venue");
    }
}
