//! Configuration and dependency initialization for the importer.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::ImporterConfig;
