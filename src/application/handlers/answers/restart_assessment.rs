//! RestartAssessment - Command handler that archives and clears the answers.

use std::sync::Arc;

use super::AnswerService;
use crate::domain::answers::ArchivedAnswers;
use crate::domain::foundation::DomainError;

/// Handler for restarting the assessment.
pub struct RestartAssessmentHandler {
    answers: Arc<AnswerService>,
}

impl RestartAssessmentHandler {
    pub fn new(answers: Arc<AnswerService>) -> Self {
        Self { answers }
    }

    /// Returns the snapshot that was moved into the previous-answers slot.
    pub async fn handle(&self) -> Result<ArchivedAnswers, DomainError> {
        let archived = self.answers.restart().await?;
        tracing::info!(
            archived = archived.answers.len(),
            "Assessment restarted; previous answers archived"
        );
        Ok(archived)
    }
}
