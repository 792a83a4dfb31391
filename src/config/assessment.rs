//! Assessment configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::{DimensionOrder, DEFAULT_DIMENSIONS};
use crate::domain::progress::{MilestoneRules, MATCHED_MAJORS_STEP, QUESTIONS_PER_DIMENSION};

/// Largest quick quiz allowed (the full questionnaire size)
const MAX_QUICK_QUIZ_SIZE: usize = 168;

/// Questionnaire shape and milestone counting
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// Dimension names in presentation order
    #[serde(default = "default_dimension_order")]
    pub dimension_order: Vec<String>,

    /// Questions per dimension block
    #[serde(default = "default_questions_per_dimension")]
    pub questions_per_dimension: usize,

    /// Answers per "matched majors" increment
    #[serde(default = "default_matched_majors_step")]
    pub matched_majors_step: usize,

    /// Questions in the popular-majors quick quiz
    #[serde(default = "default_quick_quiz_size")]
    pub quick_quiz_size: usize,
}

impl AssessmentConfig {
    /// Validated dimension order
    pub fn dimension_order(&self) -> Result<DimensionOrder, ValidationError> {
        DimensionOrder::new(self.dimension_order.iter().map(String::as_str))
            .map_err(|e| ValidationError::InvalidDimensionOrder(e.to_string()))
    }

    pub fn milestone_rules(&self) -> MilestoneRules {
        MilestoneRules {
            questions_per_dimension: self.questions_per_dimension,
            matched_majors_step: self.matched_majors_step,
        }
    }

    /// Validate assessment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.dimension_order()?;
        if self.questions_per_dimension == 0 {
            return Err(ValidationError::InvalidQuestionsPerDimension);
        }
        if self.matched_majors_step == 0 {
            return Err(ValidationError::InvalidMatchedMajorsStep);
        }
        if self.quick_quiz_size == 0 || self.quick_quiz_size > MAX_QUICK_QUIZ_SIZE {
            return Err(ValidationError::InvalidQuickQuizSize {
                max: MAX_QUICK_QUIZ_SIZE,
                actual: self.quick_quiz_size,
            });
        }
        Ok(())
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            dimension_order: default_dimension_order(),
            questions_per_dimension: default_questions_per_dimension(),
            matched_majors_step: default_matched_majors_step(),
            quick_quiz_size: default_quick_quiz_size(),
        }
    }
}

fn default_dimension_order() -> Vec<String> {
    DEFAULT_DIMENSIONS.iter().map(|d| d.to_string()).collect()
}

fn default_questions_per_dimension() -> usize {
    QUESTIONS_PER_DIMENSION
}

fn default_matched_majors_step() -> usize {
    MATCHED_MAJORS_STEP
}

fn default_quick_quiz_size() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_questionnaire() {
        let config = AssessmentConfig::default();
        assert_eq!(config.dimension_order.len(), 7);
        assert_eq!(config.questions_per_dimension, 24);
        assert_eq!(config.matched_majors_step, 20);
        assert_eq!(config.quick_quiz_size, 8);
        assert!(config.validate().is_ok());
        assert_eq!(config.milestone_rules(), MilestoneRules::default());
    }

    #[test]
    fn duplicate_dimension_is_rejected() {
        let config = AssessmentConfig {
            dimension_order: vec!["看".into(), "看".into()],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDimensionOrder(_))
        ));
    }

    #[test]
    fn zero_step_is_rejected() {
        let config = AssessmentConfig {
            matched_majors_step: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMatchedMajorsStep));
    }

    #[test]
    fn quick_quiz_size_is_bounded() {
        let zero = AssessmentConfig {
            quick_quiz_size: 0,
            ..Default::default()
        };
        let huge = AssessmentConfig {
            quick_quiz_size: 500,
            ..Default::default()
        };
        assert!(zero.validate().is_err());
        assert!(huge.validate().is_err());
    }
}
