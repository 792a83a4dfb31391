//! GetAnswers - Query handler for the current answer sheet.

use std::sync::Arc;

use super::AnswerService;
use crate::domain::answers::AnswerSheet;
use crate::domain::foundation::DomainError;

/// Handler for reading current answers.
pub struct GetAnswersHandler {
    answers: Arc<AnswerService>,
}

impl GetAnswersHandler {
    pub fn new(answers: Arc<AnswerService>) -> Self {
        Self { answers }
    }

    pub async fn handle(&self) -> Result<AnswerSheet, DomainError> {
        self.answers.answers().await
    }
}
