//! Milestone detection as answers accumulate.

use serde::Serialize;

use crate::domain::foundation::DimensionOrder;

/// Questions per dimension in the full assessment.
pub const QUESTIONS_PER_DIMENSION: usize = 24;

/// Answered questions per "matched majors" increment.
pub const MATCHED_MAJORS_STEP: usize = 20;

/// Something worth telling the user after an answer was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// Another block of questions is done; names the dimension it covered.
    DimensionCompleted { index: usize, dimension: String },
    /// Display heuristic: the "matched majors" counter went up.
    MatchedMajorsIncreased { matched_majors: usize },
    /// The last catalog question was answered.
    AssessmentCompleted { total: usize },
}

/// Counting rules for milestone events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneRules {
    pub questions_per_dimension: usize,
    pub matched_majors_step: usize,
}

impl Default for MilestoneRules {
    fn default() -> Self {
        Self {
            questions_per_dimension: QUESTIONS_PER_DIMENSION,
            matched_majors_step: MATCHED_MAJORS_STEP,
        }
    }
}

impl MilestoneRules {
    /// Events for the answered count moving from `previous` to `current`.
    ///
    /// Only counts strictly above `previous` are considered, so re-answering
    /// a question (count unchanged) never fires anything and a crossing is
    /// reported exactly once.
    pub fn detect(
        &self,
        previous: usize,
        current: usize,
        total: usize,
        order: &DimensionOrder,
    ) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        if current <= previous {
            return events;
        }

        for count in (previous + 1)..=current {
            if self.questions_per_dimension > 0
                && count % self.questions_per_dimension == 0
                && count < total
            {
                let index = count / self.questions_per_dimension - 1;
                if let Some(dimension) = order.get(index) {
                    events.push(ProgressEvent::DimensionCompleted {
                        index,
                        dimension: dimension.to_string(),
                    });
                }
            }
            if self.matched_majors_step > 0 && count % self.matched_majors_step == 0 {
                events.push(ProgressEvent::MatchedMajorsIncreased {
                    matched_majors: count / self.matched_majors_step,
                });
            }
        }

        if total > 0 && previous < total && current >= total {
            events.push(ProgressEvent::AssessmentCompleted { total });
        }
        events
    }

    /// Current value of the "matched majors" display counter.
    pub fn matched_majors(&self, answered: usize) -> usize {
        if self.matched_majors_step == 0 {
            return 0;
        }
        answered / self.matched_majors_step
    }
}
