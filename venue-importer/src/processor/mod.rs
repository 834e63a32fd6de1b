//! Processor module for the import run.
//!
//! Turns source features into document service parameter sets.

mod record_transformer;

pub use record_transformer::{parse_address, record_id, RecordTransformer};
