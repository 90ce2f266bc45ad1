use tracing::{debug, info, warn};

use crate::mapping::{criteria_to_external, from_external};
use crate::model::{CableRecord, SearchCriteria};
use crate::scoring::AccuracyScorer;

use super::backend::SearchBackend;
use super::types::SearchOutcome;

/// Runs a mapped query against a [`SearchBackend`] and annotates every result.
#[derive(Debug, Clone)]
pub struct SearchOrchestrator<B> {
    backend: B,
    scorer: AccuracyScorer,
}

impl<B: SearchBackend> SearchOrchestrator<B> {
    pub fn new(backend: B) -> Self {
        Self::with_scorer(backend, AccuracyScorer::default())
    }

    pub fn with_scorer(backend: B, scorer: AccuracyScorer) -> Self {
        Self { backend, scorer }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// One round trip, no retry. Failures are returned as
    /// [`SearchOutcome::Failed`] rather than propagated.
    pub async fn search(&self, criteria: &SearchCriteria) -> SearchOutcome {
        let payload = criteria_to_external(criteria);

        let candidates = match self.backend.search(&payload).await {
            Ok(candidates) => candidates,
            Err(error) => {
                warn!(error = %error, "Search failed");
                return SearchOutcome::Failed(error);
            }
        };

        if candidates.is_empty() {
            debug!("Search returned no candidates");
            return SearchOutcome::NoMatches;
        }

        let records: Vec<CableRecord> = candidates.iter().map(from_external).collect();
        let results = self.scorer.score_candidates(criteria, records);

        info!(results = results.len(), "Search complete");
        SearchOutcome::Matched(results)
    }
}
