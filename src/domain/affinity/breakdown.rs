//! Display helpers for precomputed major scores.

use serde::Serialize;

use crate::domain::catalog::{MajorElementAnalysis, MajorScoreSummary};

/// Score plus the positive and negative sides of its breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub score: f64,
    pub positive: f64,
    pub negative: f64,
}

impl ScoreBreakdown {
    /// `score` is shown as delivered; it is not recomputed from the parts.
    pub fn from_summary(summary: &MajorScoreSummary) -> Self {
        Self {
            score: summary.score,
            positive: summary.lexue_score + summary.shanxue_score,
            negative: summary.yanxue_deduction + summary.tiaozhan_deduction,
        }
    }
}

/// Counts of analyses pulling toward and away from a major.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisTally {
    pub positive: usize,
    pub negative: usize,
}

impl AnalysisTally {
    pub fn from_analyses(analyses: &[MajorElementAnalysis]) -> Self {
        analyses.iter().fold(Self::default(), |mut tally, a| {
            if a.kind.is_positive() {
                tally.positive += 1;
            } else if a.kind.is_negative() {
                tally.negative += 1;
            }
            tally
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{AnalysisElement, AnalysisKind};
    use crate::domain::foundation::ElementId;

    fn analysis(kind: &str) -> MajorElementAnalysis {
        MajorElementAnalysis {
            kind: AnalysisKind::from(kind.to_string()),
            element: AnalysisElement {
                id: ElementId::new(1),
                name: "e".into(),
                status: None,
                dimension: None,
            },
            summary: String::new(),
            match_reason: String::new(),
        }
    }

    #[test]
    fn breakdown_sums_each_side_and_keeps_score() {
        let summary = MajorScoreSummary {
            code: Some("080901".into()),
            name: None,
            score: 0.9,
            lexue_score: 0.5,
            shanxue_score: 0.25,
            yanxue_deduction: 0.125,
            tiaozhan_deduction: 0.125,
        };
        let b = ScoreBreakdown::from_summary(&summary);
        assert_eq!(b.score, 0.9);
        assert_eq!(b.positive, 0.75);
        assert_eq!(b.negative, 0.25);
    }

    #[test]
    fn tally_counts_by_polarity_and_skips_others() {
        let tally = AnalysisTally::from_analyses(&[
            analysis("lexue"),
            analysis("shanxue"),
            analysis("shanxue"),
            analysis("yanxue"),
            analysis("tiaozhan"),
            analysis("neutral"),
        ]);
        assert_eq!(tally, AnalysisTally { positive: 3, negative: 2 });
    }

    #[test]
    fn tally_of_nothing_is_zero() {
        assert_eq!(AnalysisTally::from_analyses(&[]), AnalysisTally::default());
    }
}
