//! Progress Module - completion tracking over the questionnaire.
//!
//! # Components
//!
//! - `ProgressTracker` - per-dimension and overall completion, resume index
//! - `sort_canonical` - the presentation order milestones are counted against
//! - `MilestoneRules` - dimension-completion and matched-majors events

mod milestones;
mod ordering;
mod tracker;

pub use milestones::{MilestoneRules, ProgressEvent, MATCHED_MAJORS_STEP, QUESTIONS_PER_DIMENSION};
pub use ordering::{canonical_cmp, sort_canonical};
pub use tracker::{DimensionProgress, ProgressSnapshot, ProgressTracker};
