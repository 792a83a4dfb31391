//! TraitKind - whether a question or element measures interest or aptitude.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The measured facet of a question or element.
///
/// Catalog rows carry this as a free string; anything other than
/// `like`/`talent` is preserved verbatim so ordering can still place it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TraitKind {
    Like,
    Talent,
    Other(String),
}

impl TraitKind {
    /// Returns the catalog string for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            TraitKind::Like => "like",
            TraitKind::Talent => "talent",
            TraitKind::Other(s) => s,
        }
    }

    pub fn is_like(&self) -> bool {
        matches!(self, TraitKind::Like)
    }

    pub fn is_talent(&self) -> bool {
        matches!(self, TraitKind::Talent)
    }
}

impl From<String> for TraitKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "like" => TraitKind::Like,
            "talent" => TraitKind::Talent,
            _ => TraitKind::Other(s),
        }
    }
}

impl From<&str> for TraitKind {
    fn from(s: &str) -> Self {
        TraitKind::from(s.to_string())
    }
}

impl From<TraitKind> for String {
    fn from(kind: TraitKind) -> Self {
        match kind {
            TraitKind::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
