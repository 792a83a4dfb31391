//! Question catalog - the immutable questionnaire loaded once per session.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{ElementId, QuestionId, TraitKind, ValidationError};

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub id: u32,
    #[serde(default)]
    pub scale_id: Option<u32>,
    #[serde(default)]
    pub option_name: String,
    /// Signed contribution of this option, roughly -2..=2.
    pub option_value: i32,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default)]
    pub additional_info: Option<String>,
}

/// A catalog question tied to one element and one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub content: String,
    pub element_id: ElementId,
    #[serde(rename = "type")]
    pub kind: TraitKind,
    #[serde(default)]
    pub direction: Option<String>,
    pub dimension: String,
    #[serde(default)]
    pub action: Option<String>,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Options sorted by their display order.
    pub fn ordered_options(&self) -> Vec<&QuestionOption> {
        let mut options: Vec<_> = self.options.iter().collect();
        options.sort_by_key(|o| o.display_order);
        options
    }

    /// Returns true if `value` is one of this question's option values.
    pub fn accepts_value(&self, value: i32) -> bool {
        self.options.iter().any(|o| o.option_value == value)
    }
}

/// Validated, immutable question catalog.
///
/// Question ids are unique, every question has a dimension and at least one
/// option. Catalog order is preserved as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds a catalog, failing closed on malformed rows.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!("duplicate question id {}", q.id),
                ));
            }
            if q.dimension.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("questions[{}].dimension", q.id)));
            }
            if q.options.is_empty() {
                return Err(ValidationError::empty_field(format!("questions[{}].options", q.id)));
            }
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    /// Number of catalog questions in `dimension`.
    pub fn count_in_dimension(&self, dimension: &str) -> usize {
        self.questions
            .iter()
            .filter(|q| q.dimension == dimension)
            .count()
    }

    /// Draws `count` distinct questions uniformly at random.
    ///
    /// Returns every question when `count` exceeds the catalog size.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Question> {
        self.questions
            .choose_multiple(rng, count)
            .cloned()
            .collect()
    }
}
