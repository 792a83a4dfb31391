//! Report handlers - portrait quadrants, challenges and the assembled report.

mod build_portrait_report;
mod classify_portrait;
mod match_challenges;

pub use build_portrait_report::{
    BuildPortraitReportHandler, PortraitEntry, PortraitReport, QuadrantSection,
};
pub use classify_portrait::{ClassifyPortraitHandler, ClassifyPortraitQuery, ClassifyPortraitResult};
pub use match_challenges::{MatchChallengesHandler, MatchChallengesQuery, MatchChallengesResult};
