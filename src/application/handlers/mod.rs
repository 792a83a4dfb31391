//! Command and query handlers.

pub mod affinity;
pub mod answers;
pub mod progress;
pub mod report;

#[cfg(test)]
pub(crate) mod test_support;

pub use affinity::{
    GetMajorAffinityHandler, MajorAffinityView, QuizResultService, RankMajorResultsHandler,
    SampleQuickQuizHandler, ScoreQuickAssessmentCommand, ScoreQuickAssessmentHandler,
    ScoreQuickAssessmentResult,
};
pub use answers::{
    AnswerService, GetAnswersHandler, GetPreviousAnswersHandler, RecordAnswerCommand,
    RecordAnswerHandler, RecordAnswerResult, RecordedAnswer, RestartAssessmentHandler,
};
pub use progress::GetProgressHandler;
pub use report::{
    BuildPortraitReportHandler, ClassifyPortraitHandler, ClassifyPortraitQuery,
    ClassifyPortraitResult, MatchChallengesHandler, MatchChallengesQuery, MatchChallengesResult,
    PortraitEntry, PortraitReport, QuadrantSection,
};
