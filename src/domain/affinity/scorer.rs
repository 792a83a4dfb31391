//! Affinity Scorer - live "love energy" score for the quick major quiz.

use serde::{Deserialize, Serialize};

use crate::domain::answers::AnswerSheet;
use crate::domain::foundation::DomainError;

/// Lowest option value on the agreement scale.
pub const OPTION_VALUE_MIN: i32 = -2;

/// Highest option value on the agreement scale.
pub const OPTION_VALUE_MAX: i32 = 2;

/// Result of scoring a quiz answer set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizScore {
    /// Normalized affinity in [0, 1].
    pub energy: f64,
    /// Raw mean option value.
    pub average: f64,
    pub answered: usize,
}

impl QuizScore {
    /// Energy as a whole percentage, rounded down.
    pub fn percent(&self) -> u8 {
        (self.energy * 100.0).floor().clamp(0.0, 100.0) as u8
    }
}

/// Scores a quiz by averaging option values onto [0, 1].
///
/// One scorer serves every question-set size; `required_answers` is the
/// size of the set being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffinityScorer {
    required_answers: usize,
}

impl AffinityScorer {
    pub fn new(required_answers: usize) -> Self {
        Self { required_answers }
    }

    pub fn required_answers(&self) -> usize {
        self.required_answers
    }

    /// `energy = clamp((mean + 2) / 4, 0, 1)` over all answers in the sheet.
    ///
    /// Refuses with `IncompleteAnswerSet` while fewer than the required
    /// number of answers (or none at all) are present.
    pub fn score(&self, answers: &AnswerSheet) -> Result<QuizScore, DomainError> {
        let answered = answers.len();
        if answered == 0 || answered < self.required_answers {
            return Err(DomainError::incomplete_answers(answered, self.required_answers));
        }

        let sum: i64 = answers.iter().map(|(_, v)| i64::from(v)).sum();
        let average = sum as f64 / answered as f64;
        let span = f64::from(OPTION_VALUE_MAX - OPTION_VALUE_MIN);
        let energy = ((average - f64::from(OPTION_VALUE_MIN)) / span).clamp(0.0, 1.0);

        Ok(QuizScore {
            energy,
            average,
            answered,
        })
    }
}
