//! Affinity handlers - quick quiz scoring, ranking and major detail views.

mod get_major_affinity;
mod quiz_result_service;
mod rank_major_results;
mod sample_quick_quiz;
mod score_quick_assessment;

pub use get_major_affinity::{GetMajorAffinityHandler, MajorAffinityView};
pub use quiz_result_service::QuizResultService;
pub use rank_major_results::RankMajorResultsHandler;
pub use sample_quick_quiz::SampleQuickQuizHandler;
pub use score_quick_assessment::{
    ScoreQuickAssessmentCommand, ScoreQuickAssessmentHandler, ScoreQuickAssessmentResult,
};
