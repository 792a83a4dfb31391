//! Catalog Module - Typed schemas for the static assessment data.
//!
//! Question catalog, report bundle and per-major detail payloads are
//! delivered as JSON by an external loader. They are deserialized into the
//! types here and validated once at the boundary; scoring code never sees
//! untyped data.

mod major;
mod question;
mod report;

pub use major::{
    AnalysisElement, AnalysisKind, MajorDetail, MajorElementAnalysis, MajorScoreSummary,
};
pub use question::{Question, QuestionCatalog, QuestionOption};
pub use report::{Challenge, Element, Mechanism, Portrait, ReportBundle};

#[cfg(test)]
pub(crate) use question::fixtures;
