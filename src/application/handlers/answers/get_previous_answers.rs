//! GetPreviousAnswers - Query handler for the last archived answer set.

use std::sync::Arc;

use super::AnswerService;
use crate::domain::answers::ArchivedAnswers;
use crate::domain::foundation::DomainError;

/// Handler for reading the previous-answers snapshot.
pub struct GetPreviousAnswersHandler {
    answers: Arc<AnswerService>,
}

impl GetPreviousAnswersHandler {
    pub fn new(answers: Arc<AnswerService>) -> Self {
        Self { answers }
    }

    pub async fn handle(&self) -> Result<Option<ArchivedAnswers>, DomainError> {
        self.answers.previous_answers().await
    }
}
