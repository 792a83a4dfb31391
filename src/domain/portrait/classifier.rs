//! PortraitClassifier - maps portrait rows onto quadrants.

use serde::Serialize;

use super::quadrant::Quadrant;
use crate::domain::catalog::Portrait;

/// Portraits of one quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantGroup {
    pub quadrant: Quadrant,
    pub label: &'static str,
    pub portraits: Vec<Portrait>,
}

impl QuadrantGroup {
    fn empty(quadrant: Quadrant) -> Self {
        Self {
            quadrant,
            label: quadrant.label(),
            portraits: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.portraits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.portraits.is_empty()
    }
}

/// All four quadrant groups, always present, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuadrantGroups {
    groups: Vec<QuadrantGroup>,
}

impl QuadrantGroups {
    fn new() -> Self {
        Self {
            groups: Quadrant::all().iter().copied().map(QuadrantGroup::empty).collect(),
        }
    }

    pub fn get(&self, quadrant: Quadrant) -> &QuadrantGroup {
        &self.groups[quadrant.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuadrantGroup> {
        self.groups.iter()
    }

    /// Total number of grouped portraits.
    pub fn portrait_count(&self) -> usize {
        self.groups.iter().map(QuadrantGroup::len).sum()
    }
}

/// Stateless quadrant classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortraitClassifier;

impl PortraitClassifier {
    pub fn classify(like_obvious: bool, talent_obvious: bool) -> Quadrant {
        Quadrant::from_flags(like_obvious, talent_obvious)
    }

    pub fn classify_portrait(portrait: &Portrait) -> Quadrant {
        Self::classify(portrait.like_obvious, portrait.talent_obvious)
    }

    /// Buckets portraits by quadrant; row order is kept inside each bucket.
    pub fn group_by_quadrant(portraits: &[Portrait]) -> QuadrantGroups {
        let mut groups = QuadrantGroups::new();
        for portrait in portraits {
            let quadrant = Self::classify_portrait(portrait);
            groups.groups[quadrant.index()].portraits.push(portrait.clone());
        }
        groups
    }

}
