//! Classification Module - whether a like/talent element is "obvious".
//!
//! Obviousness is a lookup of the upstream attribute text, not a
//! recomputation from raw answers.

mod element_classifier;
mod obviousness;

pub use element_classifier::{ElementClassification, ElementClassifier, ObviousnessGroups};
pub use obviousness::{
    is_obvious, is_to_be_discovered, Obviousness, OBVIOUS_MARKER, TO_BE_DISCOVERED_MARKER,
};
