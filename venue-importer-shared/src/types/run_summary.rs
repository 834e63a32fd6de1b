//! Run accounting: success counters and per-record failure diagnostics.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Why a record did not end up in the index.
///
/// Each variant is a record-scoped failure; none of them stop the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// The address is not a leading house number followed by a street.
    #[error("address is not parseable: {address:?}")]
    AddressUnparseable { address: String },

    /// A required property or coordinate is absent.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// The document service answered with a non-200 status.
    #[error("synthesis rejected with status {status}: {body}")]
    SynthesisRejected { status: u16, body: String },

    /// The search index refused this document.
    #[error("index write failed: {message}")]
    IndexWriteFailed { message: String },
}

impl FailureReason {
    /// Create an address-unparseable reason.
    pub fn address_unparseable(address: impl Into<String>) -> Self {
        Self::AddressUnparseable {
            address: address.into(),
        }
    }

    /// Create a missing-field reason.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create a synthesis-rejected reason.
    pub fn synthesis_rejected(status: u16, body: impl Into<String>) -> Self {
        Self::SynthesisRejected {
            status,
            body: body.into(),
        }
    }

    /// Create an index-write-failed reason.
    pub fn index_write_failed(message: impl Into<String>) -> Self {
        Self::IndexWriteFailed {
            message: message.into(),
        }
    }

    /// Whether the record was excluded before any synthesis attempt.
    pub fn is_exclusion(&self) -> bool {
        matches!(
            self,
            Self::AddressUnparseable { .. } | Self::MissingField { .. }
        )
    }
}

/// A failure diagnostic for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// The record identifier, when the feature carried one.
    pub record_id: Option<String>,
    pub reason: FailureReason,
}

/// Counters and diagnostics for one import run.
///
/// `total` is the number of features fetched, `attempted` the number of
/// candidates that reached synthesis, and `succeeded` the number of confirmed
/// index writes. `succeeded <= attempted <= total` always holds.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub total: usize,
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<RecordFailure>,
}

impl RunSummary {
    /// Start a new summary for a run over `total` features.
    pub fn new(total: usize) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: None,
            total,
            attempted: 0,
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    /// Count a candidate that is about to be synthesized.
    pub fn record_attempt(&mut self) {
        self.attempted += 1;
    }

    /// Count a confirmed index write.
    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    /// Record a failure diagnostic for one record.
    pub fn record_failure(&mut self, record_id: Option<String>, reason: FailureReason) {
        self.failures.push(RecordFailure { record_id, reason });
    }

    /// Mark the run as finished.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Records excluded before synthesis (unparseable address or missing field).
    pub fn excluded(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| f.reason.is_exclusion())
            .count()
    }

    /// Records the document service rejected.
    pub fn synthesis_rejected(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| matches!(f.reason, FailureReason::SynthesisRejected { .. }))
            .count()
    }

    /// Records the search index refused.
    pub fn index_write_failed(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| matches!(f.reason, FailureReason::IndexWriteFailed { .. }))
            .count()
    }

    /// Records that did not end up in the index, whatever the cause.
    pub fn not_succeeded(&self) -> usize {
        self.total - self.succeeded
    }

    /// Human-readable one-line report.
    pub fn report_line(&self) -> String {
        format!("processed {} of {} schools", self.succeeded, self.total)
    }
}
