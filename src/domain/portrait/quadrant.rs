//! Quadrant - the four portrait categories from crossing like/talent obviousness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Portrait quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Like obvious, talent obvious.
    #[serde(rename = "High-Passion-High-Potential")]
    HighPassionHighPotential,
    /// Like obvious, talent not obvious.
    #[serde(rename = "Interest-Driven")]
    InterestDriven,
    /// Like not obvious, talent obvious.
    #[serde(rename = "Ability-Efficient")]
    AbilityEfficient,
    /// Neither obvious.
    #[serde(rename = "Unexplored")]
    Unexplored,
}

impl Quadrant {
    /// All quadrants in display order.
    pub fn all() -> &'static [Quadrant] {
        &[
            Quadrant::HighPassionHighPotential,
            Quadrant::InterestDriven,
            Quadrant::AbilityEfficient,
            Quadrant::Unexplored,
        ]
    }

    /// Maps an obviousness pair onto its quadrant.
    pub fn from_flags(like_obvious: bool, talent_obvious: bool) -> Self {
        match (like_obvious, talent_obvious) {
            (true, true) => Quadrant::HighPassionHighPotential,
            (true, false) => Quadrant::InterestDriven,
            (false, true) => Quadrant::AbilityEfficient,
            (false, false) => Quadrant::Unexplored,
        }
    }

    /// The (like_obvious, talent_obvious) pair this quadrant stands for.
    pub fn flags(&self) -> (bool, bool) {
        match self {
            Quadrant::HighPassionHighPotential => (true, true),
            Quadrant::InterestDriven => (true, false),
            Quadrant::AbilityEfficient => (false, true),
            Quadrant::Unexplored => (false, false),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::HighPassionHighPotential => "High-Passion-High-Potential",
            Quadrant::InterestDriven => "Interest-Driven",
            Quadrant::AbilityEfficient => "Ability-Efficient",
            Quadrant::Unexplored => "Unexplored",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Quadrant::HighPassionHighPotential => 0,
            Quadrant::InterestDriven => 1,
            Quadrant::AbilityEfficient => 2,
            Quadrant::Unexplored => 3,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
