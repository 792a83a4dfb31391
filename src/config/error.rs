//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid dimension order: {0}")]
    InvalidDimensionOrder(String),

    #[error("questions_per_dimension must be greater than zero")]
    InvalidQuestionsPerDimension,

    #[error("matched_majors_step must be greater than zero")]
    InvalidMatchedMajorsStep,

    #[error("quick_quiz_size must be between 1 and {max}, got {actual}")]
    InvalidQuickQuizSize { max: usize, actual: usize },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
