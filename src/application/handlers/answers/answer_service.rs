//! AnswerService - persisted answer sheet with serialized writes.
//!
//! Every mutation is load, modify, write-through under one async mutex, so
//! two concurrent `record_answer` calls can never lose each other's answer.
//! Corrupt persisted state is discarded with a warning and treated as empty.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::answers::{AnswerSheet, ArchivedAnswers};
use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};
use crate::ports::{keys, KeyValueStore};

/// Outcome of writing a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedAnswer {
    pub previous_value: Option<i32>,
    pub previous_count: usize,
    pub answered_count: usize,
}

/// Owns the current and archived answer sets in the key-value store.
pub struct AnswerService {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl AnswerService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Current answers; empty if none were saved or the saved data is unreadable.
    pub async fn answers(&self) -> Result<AnswerSheet, DomainError> {
        let raw = self.store.get(keys::ANSWERS).await?;
        Ok(match raw {
            None => AnswerSheet::new(),
            Some(raw) => match AnswerSheet::parse(&raw) {
                Ok(sheet) => sheet,
                Err(e) => {
                    let err = DomainError::corrupt_state(keys::ANSWERS, e.to_string());
                    tracing::warn!(
                        key = keys::ANSWERS,
                        error = %err,
                        "Discarding corrupt persisted answers"
                    );
                    AnswerSheet::new()
                }
            },
        })
    }

    /// Sets one answer and persists the sheet before returning.
    pub async fn record_answer(
        &self,
        question_id: QuestionId,
        option_value: i32,
    ) -> Result<RecordedAnswer, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut sheet = self.answers().await?;
        let previous_count = sheet.len();
        let previous_value = sheet.set(question_id, option_value);

        self.store.set(keys::ANSWERS, &sheet.to_json()).await?;

        tracing::debug!(
            question_id = %question_id,
            option_value,
            answered = sheet.len(),
            "Recorded answer"
        );

        Ok(RecordedAnswer {
            previous_value,
            previous_count,
            answered_count: sheet.len(),
        })
    }

    /// Moves the current answers into the previous-answers slot and clears them.
    ///
    /// The previous slot is overwritten, never merged. If clearing the current
    /// answers fails, the previous slot is put back as it was.
    pub async fn restart(&self) -> Result<ArchivedAnswers, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut sheet = self.answers().await?;
        let archived = ArchivedAnswers::new(sheet.clear());
        let encoded = serde_json::to_string(&archived).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to encode archived answers: {}", e),
            )
        })?;

        let prior = self.store.get(keys::PREVIOUS_ANSWERS).await?;
        self.store.set(keys::PREVIOUS_ANSWERS, &encoded).await?;

        if let Err(e) = self.store.remove(keys::ANSWERS).await {
            let rollback = match &prior {
                Some(raw) => self.store.set(keys::PREVIOUS_ANSWERS, raw).await,
                None => self.store.remove(keys::PREVIOUS_ANSWERS).await,
            };
            if let Err(rollback_err) = rollback {
                tracing::error!(
                    key = keys::PREVIOUS_ANSWERS,
                    error = %rollback_err,
                    "Failed to restore previous answers after aborted restart"
                );
            }
            return Err(e.into());
        }

        tracing::debug!(archived = archived.answers.len(), "Assessment restarted");

        Ok(archived)
    }

    /// The snapshot left by the last restart, if any.
    pub async fn previous_answers(&self) -> Result<Option<ArchivedAnswers>, DomainError> {
        let Some(raw) = self.store.get(keys::PREVIOUS_ANSWERS).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<ArchivedAnswers>(&raw) {
            Ok(archived) => Ok(Some(archived)),
            Err(e) => {
                let err = DomainError::corrupt_state(keys::PREVIOUS_ANSWERS, e.to_string());
                tracing::warn!(
                    key = keys::PREVIOUS_ANSWERS,
                    error = %err,
                    "Discarding corrupt archived answers"
                );
                Ok(None)
            }
        }
    }
}
