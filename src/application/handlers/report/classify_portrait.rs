//! ClassifyPortrait - Query handler mapping obviousness flags to a quadrant.

use serde::Serialize;

use crate::domain::portrait::{PortraitClassifier, Quadrant};

/// Query for a quadrant.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyPortraitQuery {
    pub like_obvious: bool,
    pub talent_obvious: bool,
}

/// Quadrant plus its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassifyPortraitResult {
    pub quadrant: Quadrant,
    pub label: &'static str,
}

/// Pure handler; needs no ports.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyPortraitHandler;

impl ClassifyPortraitHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: ClassifyPortraitQuery) -> ClassifyPortraitResult {
        let quadrant = PortraitClassifier::classify(query.like_obvious, query.talent_obvious);
        ClassifyPortraitResult {
            quadrant,
            label: quadrant.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_label_for_each_combination() {
        let handler = ClassifyPortraitHandler::new();
        let label = |like, talent| {
            handler
                .handle(ClassifyPortraitQuery {
                    like_obvious: like,
                    talent_obvious: talent,
                })
                .label
        };

        assert_eq!(label(true, true), "High-Passion-High-Potential");
        assert_eq!(label(true, false), "Interest-Driven");
        assert_eq!(label(false, true), "Ability-Efficient");
        assert_eq!(label(false, false), "Unexplored");
    }
}
