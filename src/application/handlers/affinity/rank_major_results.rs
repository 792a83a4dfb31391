//! RankMajorResults - Query handler listing quiz results by affinity.

use std::sync::Arc;

use super::QuizResultService;
use crate::domain::affinity::RankedResult;
use crate::domain::foundation::DomainError;

/// Handler for the ranked results list.
pub struct RankMajorResultsHandler {
    results: Arc<QuizResultService>,
}

impl RankMajorResultsHandler {
    pub fn new(results: Arc<QuizResultService>) -> Self {
        Self { results }
    }

    /// Highest energy first; equal energies in major-code order.
    pub async fn handle(&self) -> Result<Vec<RankedResult>, DomainError> {
        Ok(self.results.results().await?.ranked())
    }
}
