//! AnswerSheet value object - the question → option value mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{QuestionId, Timestamp, ValidationError};

/// Current answers, at most one per question.
///
/// Pure data: no range checks on option values, no derived logic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: BTreeMap<QuestionId, i32>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, overwriting any prior value for the question.
    ///
    /// Returns the previous value, if there was one.
    pub fn set(&mut self, question_id: QuestionId, option_value: i32) -> Option<i32> {
        self.answers.insert(question_id, option_value)
    }

    pub fn get(&self, question_id: QuestionId) -> Option<i32> {
        self.answers.get(&question_id).copied()
    }

    pub fn contains(&self, question_id: QuestionId) -> bool {
        self.answers.contains_key(&question_id)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Full mapping, ordered by question id.
    pub fn get_all(&self) -> &BTreeMap<QuestionId, i32> {
        &self.answers
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, i32)> + '_ {
        self.answers.iter().map(|(q, v)| (*q, *v))
    }

    /// Empties the sheet and hands back what it held.
    pub fn clear(&mut self) -> AnswerSheet {
        std::mem::take(self)
    }

    /// Serializes to the persisted form: a JSON object of id → value.
    pub fn to_json(&self) -> String {
        let map: serde_json::Map<String, serde_json::Value> = self
            .answers
            .iter()
            .map(|(q, v)| (q.to_string(), serde_json::Value::from(*v)))
            .collect();
        serde_json::Value::Object(map).to_string()
    }

    /// Parses the persisted form.
    ///
    /// Anything other than a JSON object whose keys are question ids and
    /// whose values are integers is rejected as a whole.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| ValidationError::invalid_format("answers", e.to_string()))?;
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::invalid_format("answers", "expected a JSON object"))?;

        let mut answers = BTreeMap::new();
        for (key, value) in object {
            let question_id: QuestionId = key.parse().map_err(|_| {
                ValidationError::invalid_format("answers", format!("invalid question id '{}'", key))
            })?;
            let option_value = value
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(|| {
                    ValidationError::invalid_format(
                        "answers",
                        format!("question {} has a non-integer value", key),
                    )
                })?;
            answers.insert(question_id, option_value);
        }
        Ok(Self { answers })
    }
}

impl FromIterator<(QuestionId, i32)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, i32)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Answers moved aside by a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedAnswers {
    pub answers: AnswerSheet,
    pub archived_at: Timestamp,
}

impl ArchivedAnswers {
    pub fn new(answers: AnswerSheet) -> Self {
        Self {
            answers,
            archived_at: Timestamp::now(),
        }
    }
}
