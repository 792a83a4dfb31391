//! Obviousness - interpretation of the upstream classification text.
//!
//! The numeric aggregation that decides whether a trait is obvious happens
//! upstream; each element arrives with an attribute string such as
//! "喜欢明显" or "天赋待发现". This module only interprets that string.

use serde::{Deserialize, Serialize};

/// Marker for a trait confidently present.
pub const OBVIOUS_MARKER: &str = "明显";

/// Marker for a trait not yet confirmed.
pub const TO_BE_DISCOVERED_MARKER: &str = "待发现";

/// True iff the attribute contains the obvious marker.
pub fn is_obvious(attribute: &str) -> bool {
    attribute.contains(OBVIOUS_MARKER)
}

/// True iff the attribute contains the to-be-discovered marker.
pub fn is_to_be_discovered(attribute: &str) -> bool {
    attribute.contains(TO_BE_DISCOVERED_MARKER)
}

/// Three-state reading of an attribute string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Obviousness {
    Obvious,
    ToBeDiscovered,
    /// Neither marker present.
    Unclassified,
}

impl Obviousness {
    /// Reads an attribute. The obvious marker is checked first.
    pub fn from_attribute(attribute: &str) -> Self {
        if is_obvious(attribute) {
            Obviousness::Obvious
        } else if is_to_be_discovered(attribute) {
            Obviousness::ToBeDiscovered
        } else {
            Obviousness::Unclassified
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obvious_attribute() {
        assert!(is_obvious("喜欢明显"));
        assert_eq!(Obviousness::from_attribute("天赋明显"), Obviousness::Obvious);
    }

    #[test]
    fn to_be_discovered_attribute() {
        assert!(is_to_be_discovered("天赋待发现"));
        assert!(!is_obvious("天赋待发现"));
        assert_eq!(
            Obviousness::from_attribute("喜欢待发现"),
            Obviousness::ToBeDiscovered
        );
    }

    #[test]
    fn neither_marker_is_unclassified() {
        assert!(!is_obvious("一般"));
        assert!(!is_to_be_discovered("一般"));
        assert_eq!(Obviousness::from_attribute("一般"), Obviousness::Unclassified);
        assert_eq!(Obviousness::from_attribute(""), Obviousness::Unclassified);
    }

    #[test]
    fn predicates_are_not_complementary() {
        let both = "明显/待发现";
        assert!(is_obvious(both));
        assert!(is_to_be_discovered(both));
        assert_eq!(Obviousness::from_attribute(both), Obviousness::Obvious);
    }
}
