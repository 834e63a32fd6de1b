//! This module defines the core data structures used across the venue importer.
//! It re-exports the feature, parameter, document and summary types.

pub mod feature;
pub mod parameter_set;
pub mod run_summary;
pub mod synthesized_document;

pub use feature::{Feature, FeatureCollection, FeatureProperties, Geometry};
pub use parameter_set::ParameterSet;
pub use run_summary::{FailureReason, RecordFailure, RunSummary};
pub use synthesized_document::SynthesizedDocument;
