//! GetMajorAffinity - Query handler for a major's precomputed affinity view.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::affinity::{AnalysisTally, ScoreBreakdown};
use crate::domain::catalog::MajorElementAnalysis;
use crate::domain::foundation::{DomainError, MajorCode};
use crate::ports::CatalogSource;

/// What the major detail page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorAffinityView {
    pub major_code: MajorCode,
    pub name: Option<String>,
    pub breakdown: ScoreBreakdown,
    pub tally: AnalysisTally,
    pub analyses: Vec<MajorElementAnalysis>,
}

/// Handler for the major affinity view.
pub struct GetMajorAffinityHandler {
    catalog: Arc<dyn CatalogSource>,
}

impl GetMajorAffinityHandler {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, major_code: MajorCode) -> Result<MajorAffinityView, DomainError> {
        let detail = self.catalog.load_major_detail(&major_code).await?;

        Ok(MajorAffinityView {
            name: detail.major.name.clone(),
            breakdown: ScoreBreakdown::from_summary(&detail.major),
            tally: AnalysisTally::from_analyses(&detail.major_element_analyses),
            analyses: detail.major_element_analyses,
            major_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::StaticCatalog;
    use crate::domain::catalog::{AnalysisElement, AnalysisKind, MajorDetail, MajorScoreSummary};
    use crate::domain::foundation::{ElementId, ErrorCode};

    fn detail() -> MajorDetail {
        let analysis = |kind: &str| MajorElementAnalysis {
            kind: AnalysisKind::from(kind.to_string()),
            element: AnalysisElement {
                id: ElementId::new(1),
                name: "逻辑推理".into(),
                status: Some("喜欢明显".into()),
                dimension: Some("想".into()),
            },
            summary: String::new(),
            match_reason: String::new(),
        };
        MajorDetail {
            major: MajorScoreSummary {
                code: Some("080901".into()),
                name: Some("计算机科学与技术".into()),
                score: 0.7,
                lexue_score: 0.5,
                shanxue_score: 0.25,
                yanxue_deduction: 0.0,
                tiaozhan_deduction: 0.5,
            },
            major_element_analyses: vec![analysis("lexue"), analysis("tiaozhan")],
        }
    }

    #[tokio::test]
    async fn builds_view_from_detail() {
        let catalog = StaticCatalog::default().with_major("080901", detail());
        let handler = GetMajorAffinityHandler::new(Arc::new(catalog));

        let view = handler
            .handle(MajorCode::new("080901").unwrap())
            .await
            .unwrap();

        assert_eq!(view.breakdown.score, 0.7);
        assert_eq!(view.breakdown.positive, 0.75);
        assert_eq!(view.breakdown.negative, 0.5);
        assert_eq!(view.tally, AnalysisTally { positive: 1, negative: 1 });
        assert_eq!(view.analyses.len(), 2);
    }

    #[tokio::test]
    async fn unknown_major_is_missing_catalog_data() {
        let handler = GetMajorAffinityHandler::new(Arc::new(StaticCatalog::default()));

        let err = handler
            .handle(MajorCode::new("000000").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingCatalogData);
    }
}
