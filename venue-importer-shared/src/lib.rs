//! # Venue Importer Shared
//!
//! This crate defines the data structures shared across the venue importer.
//! It covers the source feature collection, the parameters sent to the
//! document service, the synthesized document, and the run summary.

pub mod types;

pub use types::feature::{Feature, FeatureCollection, FeatureProperties, Geometry};
pub use types::parameter_set::ParameterSet;
pub use types::run_summary::{FailureReason, RecordFailure, RunSummary};
pub use types::synthesized_document::SynthesizedDocument;
