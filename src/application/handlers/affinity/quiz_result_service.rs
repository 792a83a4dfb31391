//! QuizResultService - persisted quick-quiz results with serialized writes.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::affinity::{QuizResult, QuizResultBook};
use crate::domain::foundation::{DomainError, MajorCode};
use crate::ports::{keys, KeyValueStore};

/// Owns the `major_quiz_results` entry in the key-value store.
pub struct QuizResultService {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl QuizResultService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// All stored results; empty if none were saved or the data is unreadable.
    pub async fn results(&self) -> Result<QuizResultBook, DomainError> {
        let Some(raw) = self.store.get(keys::QUIZ_RESULTS).await? else {
            return Ok(QuizResultBook::new());
        };
        Ok(QuizResultBook::parse(&raw).unwrap_or_else(|e| {
            let err = DomainError::corrupt_state(keys::QUIZ_RESULTS, e.to_string());
            tracing::warn!(
                key = keys::QUIZ_RESULTS,
                error = %err,
                "Discarding corrupt persisted quiz results"
            );
            QuizResultBook::new()
        }))
    }

    /// Stores a result for a major, replacing any earlier one.
    pub async fn record(&self, code: MajorCode, result: QuizResult) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut book = self.results().await?;
        book.record(code, result);
        let encoded = book.to_json()?;
        self.store.set(keys::QUIZ_RESULTS, &encoded).await?;
        Ok(())
    }
}
