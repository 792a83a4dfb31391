//! BuildPortraitReport - Query handler assembling the full portrait report.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::catalog::{Challenge, Mechanism, Portrait};
use crate::domain::challenge::ChallengeMatcher;
use crate::domain::classification::{ElementClassification, ElementClassifier, Obviousness};
use crate::domain::foundation::{DomainError, TraitKind};
use crate::domain::portrait::{PortraitClassifier, Quadrant};
use crate::ports::CatalogSource;

/// A portrait row with its elements' obviousness and the challenges that
/// share its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortraitEntry {
    pub portrait: Portrait,
    pub like_obviousness: Obviousness,
    pub talent_obviousness: Obviousness,
    pub challenges: Vec<Challenge>,
}

/// One quadrant of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuadrantSection {
    pub quadrant: Quadrant,
    pub label: &'static str,
    pub entries: Vec<PortraitEntry>,
}

/// Everything the report page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortraitReport {
    /// Always four sections, in display order.
    pub sections: Vec<QuadrantSection>,
    pub elements: ElementClassification,
    pub mechanisms: Vec<Mechanism>,
}

impl PortraitReport {
    pub fn section(&self, quadrant: Quadrant) -> Option<&QuadrantSection> {
        self.sections.iter().find(|s| s.quadrant == quadrant)
    }
}

/// Handler for building the portrait report.
pub struct BuildPortraitReportHandler {
    catalog: Arc<dyn CatalogSource>,
}

impl BuildPortraitReportHandler {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<PortraitReport, DomainError> {
        let bundle = self.catalog.load_report_bundle().await?;
        let matcher = ChallengeMatcher::new(&bundle.challenge);
        let classifier = ElementClassifier::new(&bundle.element);

        let sections = PortraitClassifier::group_by_quadrant(&bundle.portrait)
            .iter()
            .map(|group| QuadrantSection {
                quadrant: group.quadrant,
                label: group.label,
                entries: group
                    .portraits
                    .iter()
                    .map(|portrait| PortraitEntry {
                        portrait: portrait.clone(),
                        like_obviousness: classifier
                            .classify(portrait.like_id, &TraitKind::Like),
                        talent_obviousness: classifier
                            .classify(portrait.talent_id, &TraitKind::Talent),
                        challenges: matcher.for_portrait(portrait).to_vec(),
                    })
                    .collect(),
            })
            .collect();

        let report = PortraitReport {
            sections,
            elements: ElementClassifier::classify_elements(&bundle.element),
            mechanisms: bundle.mechanism,
        };

        tracing::debug!(
            portraits = bundle.portrait.len(),
            challenges = bundle.challenge.len(),
            "Built portrait report"
        );
        Ok(report)
    }
}
