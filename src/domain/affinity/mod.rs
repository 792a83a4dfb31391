//! Affinity Module - major affinity display and the quick quiz score.

mod breakdown;
mod results;
mod scorer;

pub use breakdown::{AnalysisTally, ScoreBreakdown};
pub use results::{QuizResult, QuizResultBook, RankedResult};
pub use scorer::{AffinityScorer, QuizScore, OPTION_VALUE_MAX, OPTION_VALUE_MIN};
