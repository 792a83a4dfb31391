//! Key-Value Store Port - Interface for persisting assessment state.
//!
//! Values are opaque strings (JSON in practice). The store never interprets
//! them; parsing and fail-open handling live with the callers.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Persisted keys used by the application layer.
pub mod keys {
    /// Current questionnaire answers.
    pub const ANSWERS: &str = "questionnaire_answers";

    /// Answers moved aside by the last restart.
    pub const PREVIOUS_ANSWERS: &str = "questionnaire_previous_answers";

    /// Quick-quiz results per major.
    pub const QUIZ_RESULTS: &str = "major_quiz_results";
}

/// Errors that can occur during key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum KeyValueStoreError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<KeyValueStoreError> for DomainError {
    fn from(err: KeyValueStoreError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Checks that a key is usable by every adapter (ASCII word characters and '-').
pub fn validate_key(key: &str) -> Result<(), KeyValueStoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(KeyValueStoreError::InvalidKey(key.to_string()))
    }
}

/// Port for string-valued persistent storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` when the key was never written or was removed.
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Write a value, replacing any existing one. Durable once this returns.
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove a key. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;

    /// Remove every key.
    async fn clear(&self) -> Result<(), KeyValueStoreError>;
}
