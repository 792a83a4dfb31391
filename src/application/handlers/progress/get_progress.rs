//! GetProgress - Query handler for questionnaire completion.

use std::sync::Arc;

use crate::application::handlers::answers::AnswerService;
use crate::domain::foundation::{DimensionOrder, DomainError};
use crate::domain::progress::{MilestoneRules, ProgressSnapshot, ProgressTracker};
use crate::ports::CatalogSource;

/// Handler for the progress view.
pub struct GetProgressHandler {
    catalog: Arc<dyn CatalogSource>,
    answers: Arc<AnswerService>,
    order: DimensionOrder,
    rules: MilestoneRules,
}

impl GetProgressHandler {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        answers: Arc<AnswerService>,
        order: DimensionOrder,
        rules: MilestoneRules,
    ) -> Self {
        Self {
            catalog,
            answers,
            order,
            rules,
        }
    }

    pub async fn handle(&self) -> Result<ProgressSnapshot, DomainError> {
        let catalog = self.catalog.load_questions().await?;
        let answers = self.answers.answers().await?;

        let snapshot = ProgressTracker::new(&catalog, &answers, &self.order).snapshot(&self.rules);
        tracing::debug!(
            answered = snapshot.answered_count,
            total = snapshot.total,
            percent = snapshot.percent.value(),
            "Computed progress"
        );
        Ok(snapshot)
    }
}
