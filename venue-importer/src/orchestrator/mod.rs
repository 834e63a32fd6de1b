//! Orchestrator module for the import run.
//!
//! Coordinates the fetcher, transformer, synthesizer, and loader components.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::errors::IngestError;
use crate::fetcher::SourceFetcher;
use crate::loader::{RecordOutcome, SearchLoader};
use crate::processor::{record_id, RecordTransformer};
use crate::synthesis::{DocumentSynthesizer, SynthesisOutcome};
use venue_importer_shared::{FailureReason, Feature, ParameterSet, RunSummary};

/// Configuration for the orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Maximum number of records in flight. `1` processes records strictly one
    /// at a time.
    pub concurrency: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

/// Result of handling one feature, before it is tallied.
enum Step {
    Excluded {
        record_id: Option<String>,
        reason: FailureReason,
    },
    Processed {
        record_id: String,
        outcome: RecordOutcome,
    },
}

/// Orchestrator that coordinates an import run.
///
/// The orchestrator:
/// - Fetches the source collection once
/// - Runs every feature through transform, synthesis and index write
/// - Keeps failures of one record from affecting the others
/// - Aggregates the run summary in source order
pub struct Orchestrator {
    fetcher: Arc<dyn SourceFetcher>,
    transformer: RecordTransformer,
    synthesizer: Arc<dyn DocumentSynthesizer>,
    loader: SearchLoader,
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Create a new orchestrator with the given components.
    pub fn new(
        fetcher: Arc<dyn SourceFetcher>,
        transformer: RecordTransformer,
        synthesizer: Arc<dyn DocumentSynthesizer>,
        loader: SearchLoader,
    ) -> Self {
        Self::with_config(
            fetcher,
            transformer,
            synthesizer,
            loader,
            OrchestratorConfig::default(),
        )
    }

    /// Create a new orchestrator with custom configuration.
    pub fn with_config(
        fetcher: Arc<dyn SourceFetcher>,
        transformer: RecordTransformer,
        synthesizer: Arc<dyn DocumentSynthesizer>,
        loader: SearchLoader,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            fetcher,
            transformer,
            synthesizer,
            loader,
            config,
        }
    }

    /// Run the import to completion.
    ///
    /// Returns the run summary once every feature has been handled. A fatal
    /// error stops the run; the summary of the records handled so far is
    /// logged before the error is returned.
    #[instrument(skip(self), fields(concurrency = self.config.concurrency))]
    pub async fn run(&self) -> Result<RunSummary, IngestError> {
        info!("Starting venue import");

        self.loader.check_ready().await?;

        let collection = self.fetcher.fetch().await?;
        let mut summary = RunSummary::new(collection.len());

        info!(
            run_id = %summary.run_id,
            total = summary.total,
            "Processing source features"
        );

        let mut steps = stream::iter(collection.features.iter())
            .map(|feature| self.step(feature))
            .buffered(self.config.concurrency.max(1));

        while let Some(step) = steps.next().await {
            match step {
                Ok(step) => Self::tally(&mut summary, step),
                Err(e) => {
                    summary.finish();
                    error!(
                        run_id = %summary.run_id,
                        succeeded = summary.succeeded,
                        attempted = summary.attempted,
                        total = summary.total,
                        error = %e,
                        "Import aborted: {}",
                        summary.report_line()
                    );
                    return Err(e);
                }
            }
        }

        summary.finish();
        Self::report(&summary);
        Ok(summary)
    }

    /// Synthesize and index one candidate record.
    ///
    /// A rejection by the document service or a document refused by the index
    /// is returned as `RecordOutcome::Failed`; unreachable services are errors.
    pub async fn process(
        &self,
        id: &str,
        params: &ParameterSet,
    ) -> Result<RecordOutcome, IngestError> {
        match self.synthesizer.synthesize(params).await? {
            SynthesisOutcome::Synthesized(document) => self.loader.write(id, document).await,
            SynthesisOutcome::Rejected { status, body } => {
                warn!(
                    record_id = %id,
                    status = status,
                    "could not create/update id {}: {}",
                    id,
                    body
                );
                Ok(RecordOutcome::Failed(FailureReason::synthesis_rejected(
                    status, body,
                )))
            }
        }
    }

    async fn step(&self, feature: &Feature) -> Result<Step, IngestError> {
        match self.transformer.try_transform(feature) {
            Ok(params) => {
                let outcome = self.process(&params.id, &params).await?;
                Ok(Step::Processed {
                    record_id: params.id,
                    outcome,
                })
            }
            Err(reason) => {
                let record_id = record_id(feature);
                debug!(record_id = ?record_id, reason = %reason, "Excluding record");
                Ok(Step::Excluded { record_id, reason })
            }
        }
    }

    fn tally(summary: &mut RunSummary, step: Step) {
        match step {
            Step::Excluded { record_id, reason } => summary.record_failure(record_id, reason),
            Step::Processed { record_id, outcome } => {
                summary.record_attempt();
                match outcome {
                    RecordOutcome::Indexed => summary.record_success(),
                    RecordOutcome::Failed(reason) => {
                        summary.record_failure(Some(record_id), reason)
                    }
                }
            }
        }
    }

    fn report(summary: &RunSummary) {
        let elapsed_ms = summary
            .finished_at
            .map(|finished| (finished - summary.started_at).num_milliseconds())
            .unwrap_or_default();

        info!(
            run_id = %summary.run_id,
            succeeded = summary.succeeded,
            attempted = summary.attempted,
            total = summary.total,
            excluded = summary.excluded(),
            synthesis_rejected = summary.synthesis_rejected(),
            index_write_failed = summary.index_write_failed(),
            not_indexed = summary.not_succeeded(),
            elapsed_ms = elapsed_ms,
            "{}",
            summary.report_line()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use venue_importer_repository::{SearchIndexError, SearchIndexProvider, UpsertDocumentRequest};
    use venue_importer_shared::{FeatureCollection, SynthesizedDocument};

    struct StaticFetcher(FeatureCollection);

    #[async_trait]
    impl SourceFetcher for StaticFetcher {
        async fn fetch(&self) -> Result<FeatureCollection, IngestError> {
            Ok(self.0.clone())
        }
    }

    /// Accepts even ids, rejects odd ones.
    struct ParitySynthesizer;

    #[async_trait]
    impl DocumentSynthesizer for ParitySynthesizer {
        async fn synthesize(
            &self,
            params: &ParameterSet,
        ) -> Result<SynthesisOutcome, IngestError> {
            let id: i64 = params.id.parse().unwrap();
            if id % 2 == 0 {
                Ok(SynthesisOutcome::Synthesized(SynthesizedDocument::new(
                    format!(r#"{{"id":"{}"}}"#, params.id),
                )))
            } else {
                Ok(SynthesisOutcome::Rejected {
                    status: 400,
                    body: "lat parameter is required".to_string(),
                })
            }
        }
    }

    #[derive(Default)]
    struct RecordingProvider {
        written: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SearchIndexProvider for RecordingProvider {
        async fn ping(&self) -> Result<(), SearchIndexError> {
            Ok(())
        }

        async fn upsert_document(
            &self,
            request: &UpsertDocumentRequest,
        ) -> Result<(), SearchIndexError> {
            self.written
                .lock()
                .unwrap()
                .push(request.document_id.clone());
            Ok(())
        }
    }

    fn orchestrator(
        features: Vec<Feature>,
        concurrency: usize,
    ) -> (Orchestrator, Arc<RecordingProvider>) {
        let provider = Arc::new(RecordingProvider::default());
        let orchestrator = Orchestrator::with_config(
            Arc::new(StaticFetcher(FeatureCollection::new(features))),
            RecordTransformer::new(),
            Arc::new(ParitySynthesizer),
            SearchLoader::new(provider.clone()),
            OrchestratorConfig { concurrency },
        );
        (orchestrator, provider)
    }

    fn features() -> Vec<Feature> {
        vec![
            Feature::point(2, "A", "1 Main St", "02101", -71.0, 42.0),
            Feature::point(3, "B", "2 Main St", "02101", -71.0, 42.0),
            Feature::point(4, "C", "Main St", "02101", -71.0, 42.0),
            Feature::point(6, "D", "4 Main St", "02101", -71.0, 42.0),
        ]
    }

    #[tokio::test]
    async fn test_run_tallies_each_cause() {
        let (orchestrator, provider) = orchestrator(features(), 1);

        let summary = orchestrator.run().await.unwrap();

        assert_eq!(summary.total, 4);
        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.excluded(), 1);
        assert_eq!(summary.synthesis_rejected(), 1);
        assert_eq!(summary.index_write_failed(), 0);
        assert_eq!(*provider.written.lock().unwrap(), vec!["2", "6"]);
        assert_eq!(summary.report_line(), "processed 2 of 4 schools");
    }

    #[tokio::test]
    async fn test_bounded_concurrency_keeps_accounting() {
        let (orchestrator, provider) = orchestrator(features(), 3);

        let summary = orchestrator.run().await.unwrap();

        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(provider.written.lock().unwrap().len(), 2);
        let failure_ids: Vec<Option<String>> = summary
            .failures
            .iter()
            .map(|f| f.record_id.clone())
            .collect();
        assert_eq!(
            failure_ids,
            vec![Some("3".to_string()), Some("4".to_string())]
        );
    }

    #[tokio::test]
    async fn test_process_rejected_record() {
        let (orchestrator, provider) = orchestrator(vec![], 1);
        let params = RecordTransformer::new()
            .transform(&Feature::point(5, "E", "5 Main St", "02101", -71.0, 42.0))
            .unwrap();

        let outcome = orchestrator.process(&params.id, &params).await.unwrap();

        assert_eq!(
            outcome,
            RecordOutcome::Failed(FailureReason::synthesis_rejected(
                400,
                "lat parameter is required"
            ))
        );
        assert!(provider.written.lock().unwrap().is_empty());
    }
}
