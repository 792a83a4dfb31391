//! ScoreQuickAssessment - Command handler scoring a popular-majors quick quiz.

use serde::Serialize;
use std::sync::Arc;

use super::QuizResultService;
use crate::domain::affinity::{AffinityScorer, QuizResult, QuizScore};
use crate::domain::answers::AnswerSheet;
use crate::domain::foundation::{DomainError, MajorCode};

/// Command to score one major's quiz answers.
#[derive(Debug, Clone)]
pub struct ScoreQuickAssessmentCommand {
    pub major_code: MajorCode,
    pub answers: AnswerSheet,
}

/// Result of scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreQuickAssessmentResult {
    pub major_code: MajorCode,
    pub score: QuizScore,
}

/// Handler for the quick quiz.
pub struct ScoreQuickAssessmentHandler {
    results: Arc<QuizResultService>,
    scorer: AffinityScorer,
}

impl ScoreQuickAssessmentHandler {
    /// `quiz_size` is the number of answers a complete quiz carries.
    pub fn new(results: Arc<QuizResultService>, quiz_size: usize) -> Self {
        Self {
            results,
            scorer: AffinityScorer::new(quiz_size),
        }
    }

    pub async fn handle(
        &self,
        cmd: ScoreQuickAssessmentCommand,
    ) -> Result<ScoreQuickAssessmentResult, DomainError> {
        // 1. Score; refuses incomplete sets
        let score = self.scorer.score(&cmd.answers)?;

        // 2. Persist per major
        self.results
            .record(cmd.major_code.clone(), QuizResult::from_score(&score))
            .await?;

        tracing::info!(
            major_code = %cmd.major_code,
            energy = score.energy,
            answered = score.answered,
            "Scored quick assessment"
        );

        Ok(ScoreQuickAssessmentResult {
            major_code: cmd.major_code,
            score,
        })
    }
}
