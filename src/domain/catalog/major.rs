//! Per-major detail payload: precomputed scores and element analyses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::classification::Obviousness;
use crate::domain::foundation::{ElementId, ValidationError};

/// How an element analysis bears on a major.
///
/// `shanxue` (good at learning) and `lexue` (enjoys learning) count in the
/// major's favour; `yanxue` (averse to learning) and `tiaozhan` (challenge)
/// count against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnalysisKind {
    Shanxue,
    Lexue,
    Yanxue,
    Tiaozhan,
    Other(String),
}

impl AnalysisKind {
    pub fn as_str(&self) -> &str {
        match self {
            AnalysisKind::Shanxue => "shanxue",
            AnalysisKind::Lexue => "lexue",
            AnalysisKind::Yanxue => "yanxue",
            AnalysisKind::Tiaozhan => "tiaozhan",
            AnalysisKind::Other(s) => s,
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, AnalysisKind::Shanxue | AnalysisKind::Lexue)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, AnalysisKind::Yanxue | AnalysisKind::Tiaozhan)
    }
}

impl From<String> for AnalysisKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "shanxue" => AnalysisKind::Shanxue,
            "lexue" => AnalysisKind::Lexue,
            "yanxue" => AnalysisKind::Yanxue,
            "tiaozhan" => AnalysisKind::Tiaozhan,
            _ => AnalysisKind::Other(s),
        }
    }
}

impl From<AnalysisKind> for String {
    fn from(kind: AnalysisKind) -> Self {
        match kind {
            AnalysisKind::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Element reference embedded in an analysis row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisElement {
    pub id: ElementId,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub dimension: Option<String>,
}

impl AnalysisElement {
    pub fn obviousness(&self) -> Obviousness {
        self.status
            .as_deref()
            .map(Obviousness::from_attribute)
            .unwrap_or(Obviousness::Unclassified)
    }
}

/// One pre-associated element analysis of a major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorElementAnalysis {
    #[serde(rename = "type")]
    pub kind: AnalysisKind,
    pub element: AnalysisElement,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub match_reason: String,
}

/// Precomputed affinity aggregate for a major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorScoreSummary {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub score: f64,
    #[serde(default)]
    pub lexue_score: f64,
    #[serde(default)]
    pub shanxue_score: f64,
    #[serde(default)]
    pub yanxue_deduction: f64,
    #[serde(default)]
    pub tiaozhan_deduction: f64,
}

/// Detail payload for a single major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorDetail {
    pub major: MajorScoreSummary,
    #[serde(default)]
    pub major_element_analyses: Vec<MajorElementAnalysis>,
}

impl MajorDetail {
    /// Rejects non-finite scores before they reach display.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let m = &self.major;
        let fields = [
            ("score", m.score),
            ("lexueScore", m.lexue_score),
            ("shanxueScore", m.shanxue_score),
            ("yanxueDeduction", m.yanxue_deduction),
            ("tiaozhanDeduction", m.tiaozhan_deduction),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ValidationError::invalid_format(field, "score must be finite"));
            }
        }
        Ok(())
    }
}
