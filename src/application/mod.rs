//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write answers and quiz results; query handlers read
//! progress, reports and rankings.

pub mod handlers;

pub use handlers::{
    AnswerService, BuildPortraitReportHandler, ClassifyPortraitHandler, GetAnswersHandler,
    GetMajorAffinityHandler, GetPreviousAnswersHandler, GetProgressHandler,
    MatchChallengesHandler, QuizResultService, RankMajorResultsHandler, RecordAnswerHandler,
    RestartAssessmentHandler, SampleQuickQuizHandler, ScoreQuickAssessmentHandler,
};
