//! RecordAnswer - Command handler for answering one questionnaire question.

use serde::Serialize;
use std::sync::Arc;

use super::AnswerService;
use crate::domain::foundation::{DimensionOrder, DomainError, ErrorCode, QuestionId};
use crate::domain::progress::{MilestoneRules, ProgressEvent};
use crate::ports::CatalogSource;

/// Command to record an answer.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub question_id: QuestionId,
    pub option_value: i32,
}

/// Result of recording an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAnswerResult {
    pub answered_count: usize,
    /// Milestones crossed by this answer, in the order they were reached.
    pub events: Vec<ProgressEvent>,
}

/// Handler for recording answers.
pub struct RecordAnswerHandler {
    catalog: Arc<dyn CatalogSource>,
    answers: Arc<AnswerService>,
    order: DimensionOrder,
    rules: MilestoneRules,
}

impl RecordAnswerHandler {
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

    pub async fn handle(&self, cmd: RecordAnswerCommand) -> Result<RecordAnswerResult, DomainError> {
        // 1. The question must exist in the catalog
        let catalog = self.catalog.load_questions().await?;
        if !catalog.contains(cmd.question_id) {
            return Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Question {} is not in the catalog", cmd.question_id),
            ));
        }

        // 2. Write-through
        let recorded = self
            .answers
            .record_answer(cmd.question_id, cmd.option_value)
            .await?;

        // 3. Milestones for the count change
        let events = self.rules.detect(
            recorded.previous_count,
            recorded.answered_count,
            catalog.len(),
            &self.order,
        );
        for event in &events {
            tracing::info!(event = ?event, "Progress milestone reached");
        }

        Ok(RecordAnswerResult {
            answered_count: recorded.answered_count,
            events,
        })
    }
}
