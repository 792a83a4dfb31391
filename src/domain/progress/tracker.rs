//! ProgressTracker - completion counts derived from answers and the catalog.
//!
//! A read-only view over one catalog and one answer sheet. Nothing is cached;
//! every query recomputes from its inputs.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use super::milestones::MilestoneRules;
use super::ordering::sort_canonical;
use crate::domain::answers::AnswerSheet;
use crate::domain::catalog::{Question, QuestionCatalog};
use crate::domain::foundation::{DimensionOrder, Percentage};

/// Answered vs. total questions of one dimension.
///
/// Serializes with its derived `ratio` and `complete` alongside the counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionProgress {
    pub dimension: String,
    pub answered: usize,
    pub total: usize,
}

impl DimensionProgress {
    /// `answered / total`; 0.0 for a dimension with no questions.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64
    }

    /// Complete iff the ratio is exactly 1 and the dimension has questions.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }

    pub fn percent(&self) -> Percentage {
        Percentage::from_ratio(self.answered, self.total)
    }
}

impl Serialize for DimensionProgress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DimensionProgress", 5)?;
        state.serialize_field("dimension", &self.dimension)?;
        state.serialize_field("answered", &self.answered)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("ratio", &self.ratio())?;
        state.serialize_field("complete", &self.is_complete())?;
        state.end()
    }
}

/// Everything the progress bar and resume logic need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub answered_count: usize,
    pub total: usize,
    pub percent: Percentage,
    pub dimension_breakdown: Vec<DimensionProgress>,
    pub matched_majors: usize,
    /// Index (canonical order) of the question to show next.
    pub resume_index: usize,
    pub is_complete: bool,
}

/// Computes progress over a catalog and an answer sheet.
#[derive(Debug, Clone, Copy)]
pub struct ProgressTracker<'a> {
    catalog: &'a QuestionCatalog,
    answers: &'a AnswerSheet,
    order: &'a DimensionOrder,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(
        catalog: &'a QuestionCatalog,
        answers: &'a AnswerSheet,
        order: &'a DimensionOrder,
    ) -> Self {
        Self {
            catalog,
            answers,
            order,
        }
    }

    /// Number of question ids present in the answer sheet.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Answered vs. total for one dimension.
    pub fn dimension_progress(&self, dimension: &str) -> DimensionProgress {
        let (answered, total) = self
            .catalog
            .questions()
            .iter()
            .filter(|q| q.dimension == dimension)
            .fold((0, 0), |(answered, total), q| {
                let hit = usize::from(self.answers.contains(q.id));
                (answered + hit, total + 1)
            });
        DimensionProgress {
            dimension: dimension.to_string(),
            answered,
            total,
        }
    }

    /// Progress of every dimension: configured ones in order, then any
    /// dimension the catalog uses that the order does not know.
    pub fn dimension_breakdown(&self) -> Vec<DimensionProgress> {
        let mut dimensions: Vec<&str> = self.order.iter().collect();
        for question in sort_canonical(self.catalog.questions(), self.order) {
            if !dimensions.contains(&question.dimension.as_str()) {
                dimensions.push(&question.dimension);
            }
        }
        dimensions
            .into_iter()
            .map(|d| self.dimension_progress(d))
            .collect()
    }

    /// Share of catalog questions answered.
    pub fn overall_percent(&self) -> Percentage {
        Percentage::from_ratio(self.answered_in_catalog(), self.catalog.len())
    }

    /// True once every catalog question has an answer.
    pub fn is_complete(&self) -> bool {
        !self.catalog.is_empty() && self.answered_in_catalog() == self.catalog.len()
    }

    /// Index of the first unanswered question in `sorted`, or 0 if all are answered.
    pub fn first_unanswered_index(&self, sorted: &[&Question]) -> usize {
        sorted
            .iter()
            .position(|q| !self.answers.contains(q.id))
            .unwrap_or(0)
    }

    /// Full snapshot for the progress view.
    pub fn snapshot(&self, rules: &MilestoneRules) -> ProgressSnapshot {
        let sorted = sort_canonical(self.catalog.questions(), self.order);
        ProgressSnapshot {
            answered_count: self.answered_count(),
            total: self.catalog.len(),
            percent: self.overall_percent(),
            dimension_breakdown: self.dimension_breakdown(),
            matched_majors: rules.matched_majors(self.answered_count()),
            resume_index: self.first_unanswered_index(&sorted),
            is_complete: self.is_complete(),
        }
    }

    fn answered_in_catalog(&self) -> usize {
        self.catalog
            .questions()
            .iter()
            .filter(|q| self.answers.contains(q.id))
            .count()
    }
}
