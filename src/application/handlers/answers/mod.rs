//! Answer handlers - recording, reading and restarting the questionnaire.

mod answer_service;
mod get_answers;
mod get_previous_answers;
mod record_answer;
mod restart_assessment;

pub use answer_service::{AnswerService, RecordedAnswer};
pub use get_answers::GetAnswersHandler;
pub use get_previous_answers::GetPreviousAnswersHandler;
pub use record_answer::{RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult};
pub use restart_assessment::RestartAssessmentHandler;
