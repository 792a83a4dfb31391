//! Report bundle - precomputed portrait, challenge, element and mechanism rows.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::classification::Obviousness;
use crate::domain::foundation::{ElementId, TraitKind, ValidationError};

/// A measured like or talent facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TraitKind,
    #[serde(default)]
    pub dimension: String,
    /// Upstream classification text, e.g. "喜欢明显" or "天赋待发现".
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Element {
    /// Obviousness read from `attribute`; no attribute is unclassified.
    pub fn obviousness(&self) -> Obviousness {
        self.attribute
            .as_deref()
            .map(Obviousness::from_attribute)
            .unwrap_or(Obviousness::Unclassified)
    }
}

/// Precomputed portrait row for one (like, talent) element combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portrait {
    pub like_id: ElementId,
    pub talent_id: ElementId,
    pub like_obvious: bool,
    pub talent_obvious: bool,
    pub name: String,
    #[serde(default)]
    pub explain: String,
}

/// A challenge and its coping strategy, keyed like a portrait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub like_id: ElementId,
    pub talent_id: ElementId,
    pub like_obvious: bool,
    pub talent_obvious: bool,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub strategy: String,
}

/// Explanatory mechanism text shipped with the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mechanism {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub content: String,
}

/// Everything the report pages need, as delivered by the catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportBundle {
    #[serde(default)]
    pub portrait: Vec<Portrait>,
    #[serde(default)]
    pub challenge: Vec<Challenge>,
    #[serde(default)]
    pub element: Vec<Element>,
    #[serde(default)]
    pub mechanism: Vec<Mechanism>,
}

impl ReportBundle {
    /// Checks the bundle before any classification runs on it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for element in &self.element {
            if !seen.insert((element.id, &element.kind)) {
                return Err(ValidationError::invalid_format(
                    "element",
                    format!("duplicate {} element id {}", element.kind, element.id),
                ));
            }
            if element.name.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("element[{}].name", element.id)));
            }
        }
        if let Some(i) = self.portrait.iter().position(|p| p.name.trim().is_empty()) {
            return Err(ValidationError::empty_field(format!("portrait[{}].name", i)));
        }
        if let Some(i) = self.challenge.iter().position(|c| c.name.trim().is_empty()) {
            return Err(ValidationError::empty_field(format!("challenge[{}].name", i)));
        }
        Ok(())
    }
}
