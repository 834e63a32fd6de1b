//! The document returned by the document service.

use std::fmt;

/// An index-ready document body, kept as the raw text the document service
/// returned. The importer never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedDocument(String);

impl SynthesizedDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SynthesizedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
