//! ElementClassifier - obviousness lookup for like/talent elements.

use serde::Serialize;
use std::collections::HashMap;

use super::obviousness::Obviousness;
use crate::domain::catalog::Element;
use crate::domain::foundation::{ElementId, TraitKind};

/// Elements of one kind split by obviousness, catalog order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObviousnessGroups {
    pub obvious: Vec<Element>,
    pub to_be_discovered: Vec<Element>,
    pub unclassified: Vec<Element>,
}

impl ObviousnessGroups {
    fn push(&mut self, element: Element) {
        match element.obviousness() {
            Obviousness::Obvious => self.obvious.push(element),
            Obviousness::ToBeDiscovered => self.to_be_discovered.push(element),
            Obviousness::Unclassified => self.unclassified.push(element),
        }
    }

    pub fn len(&self) -> usize {
        self.obvious.len() + self.to_be_discovered.len() + self.unclassified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Like and talent elements grouped for the report summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementClassification {
    pub like: ObviousnessGroups,
    pub talent: ObviousnessGroups,
}

/// Looks up obviousness by (element id, kind) from report elements.
#[derive(Debug, Clone, Default)]
pub struct ElementClassifier {
    by_key: HashMap<(ElementId, TraitKind), Obviousness>,
}

impl ElementClassifier {
    pub fn new(elements: &[Element]) -> Self {
        let by_key = elements
            .iter()
            .map(|e| ((e.id, e.kind.clone()), e.obviousness()))
            .collect();
        Self { by_key }
    }

    /// Obviousness of an element; unknown elements are unclassified.
    pub fn classify(&self, element_id: ElementId, kind: &TraitKind) -> Obviousness {
        self.by_key
            .get(&(element_id, kind.clone()))
            .copied()
            .unwrap_or(Obviousness::Unclassified)
    }

    /// Splits like and talent elements by obviousness. Other kinds are skipped.
    pub fn classify_elements(elements: &[Element]) -> ElementClassification {
        let mut result = ElementClassification::default();
        for element in elements {
            match element.kind {
                TraitKind::Like => result.like.push(element.clone()),
                TraitKind::Talent => result.talent.push(element.clone()),
                TraitKind::Other(_) => {}
            }
        }
        result
    }
}
